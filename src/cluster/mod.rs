//! Density-based clustering over a [`PointStore`](crate::point::PointStore).
//!
//! ## DBSCAN
//!
//! DBSCAN discovers clusters of arbitrary shape without being told how many
//! there are, and separates out points in sparse regions as noise. It has two
//! parameters: a neighborhood radius `epsilon`, and `min_pts`, the number of
//! points (the query point included) a neighborhood needs for its center to
//! seed or grow a cluster.
//!
//! Neighbor lookup is exact and brute force: every region query scans the
//! whole store. Results depend only on the store order, so a given input
//! always yields the same cluster ids, member order and noise set.
//!
//! ## Usage
//!
//! ```rust
//! use pointscan::cluster::{Clustering, Dbscan, DbscanExt, NOISE};
//! use pointscan::point::{Point, PointStore};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0, 1.0],
//! ];
//!
//! // Flat labels, noise as a sentinel.
//! let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1, NOISE]);
//!
//! // Flat labels, noise as `None`.
//! let labels = Dbscan::new(0.5, 2).fit_predict_with_noise(&data).unwrap();
//! assert_eq!(labels[4], None);
//!
//! // In-place labelling of a store you own.
//! let mut store: PointStore = [Point::new(0.0, 0.0), Point::new(0.2, 0.0)]
//!     .into_iter()
//!     .collect();
//! let clusters = Dbscan::new(0.5, 2).fit(&mut store).unwrap();
//! assert_eq!(clusters[0].members(), &[0, 1]);
//! assert_eq!(store[1].cluster_id(), Some(0));
//! ```

mod dbscan;
mod traits;
pub(crate) mod util;

pub use dbscan::{cluster, Cluster, Clustered, Dbscan, DbscanExt, DbscanParams, NOISE};
pub use traits::Clustering;
