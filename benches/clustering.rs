use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pointscan::cluster::{Clustering, Dbscan};
use pointscan::point::{Point, PointStore};
use rand::prelude::*;

fn blobs(rng: &mut StdRng, centers: &[[f32; 3]], per_center: usize) -> PointStore {
    let mut store = PointStore::with_capacity(centers.len() * per_center);
    for c in centers {
        for _ in 0..per_center {
            store.push(Point::new_3d(
                c[0] + rng.random::<f32>() - 0.5,
                c[1] + rng.random::<f32>() - 0.5,
                c[2] + rng.random::<f32>() - 0.5,
            ));
        }
    }
    store
}

fn bench_dbscan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dbscan");

    let mut rng = StdRng::seed_from_u64(42);
    let centers = [
        [0.0, 0.0, 0.0],
        [5.0, 5.0, 0.0],
        [10.0, 0.0, 5.0],
        [0.0, 10.0, 10.0],
    ];
    let store = blobs(&mut rng, &centers, 250);

    group.bench_function("process_n1000_eps0.3_minpts5", |b| {
        let dbscan = Dbscan::new(0.3, 5);
        b.iter_batched_ref(
            || store.clone(),
            |s| dbscan.fit(black_box(s)).unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("region_query_n1000", |b| {
        let dbscan = Dbscan::new(0.3, 5);
        b.iter(|| dbscan.region_query(black_box(&store), black_box(17)))
    });

    group.finish();
}

criterion_group!(benches, bench_dbscan);
criterion_main!(benches);
