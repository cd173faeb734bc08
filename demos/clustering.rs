//! DBSCAN on three jittered groups of 2D points.
//!
//! Run with `RUST_LOG=pointscan=debug` to see the engine's events.

use pointscan::{Dbscan, Point, PointStore};
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> pointscan::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cores = [Point::new(0.0, 0.0), Point::new(2.0, 3.0), Point::new(7.0, 4.0)];

    // Each core plus ten neighbors jittered by up to ±0.5 on each axis.
    let mut rng = rand::rng();
    let mut store = PointStore::new();
    for core in &cores {
        store.push(core.clone());
        for _ in 0..10 {
            store.push(Point::new(
                core.x + rng.random::<f32>() - 0.5,
                core.y + rng.random::<f32>() - 0.5,
            ));
        }
    }

    let clusters = Dbscan::new(0.3, 3).process(&mut store)?;

    for cluster in &clusters {
        println!("Cluster {}", cluster.id());
        for p in cluster.points(&store) {
            println!("  ({},{},{})", p.x, p.y, p.z);
        }
        println!("-----------------------------");
    }

    println!("Noise");
    for p in store.noise_points() {
        println!("  ({},{},{})", p.x, p.y, p.z);
    }

    Ok(())
}
