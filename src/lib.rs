//! Density-based spatial clustering.
//!
//! `pointscan` clusters 2D and 3D points with DBSCAN, labelling a caller-owned
//! [`PointStore`] in place and returning the clusters it found.
//!
//! The modules are:
//! - [`point`]: points, labels and the index-addressed point store
//! - [`cluster`]: the DBSCAN engine and the [`Clustering`] interface
//! - [`error`]: input validation errors
//!
//! ```rust
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.2, 0.0],
//!     vec![0.4, 0.0],
//!     vec![9.0, 9.0],
//! ];
//! let out = pointscan::cluster(&data, 0.3, 2).unwrap();
//! assert_eq!(out.clusters.len(), 1);
//! assert_eq!(out.clusters[0].members(), &[0, 1, 2]);
//! assert_eq!(out.noise_indices(), vec![3]);
//! ```

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod point;

pub use cluster::{
    cluster, Cluster, Clustered, Clustering, Dbscan, DbscanExt, DbscanParams, NOISE,
};
pub use error::{Error, Result};
pub use point::{Label, Point, PointStore};
