//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. It:
//!
//! - Discovers clusters of arbitrary shape
//! - Determines the number of clusters itself
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance (inclusive) between two neighbors.
//! - **MinPts**: Minimum neighborhood size for a point to be "core". The
//!   neighborhood includes the point itself.
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Not density-reachable from any core point.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P, in store order:
//!    - Mark P visited and find its neighbors within ε
//!    - If |neighbors| < MinPts, label P noise (may change later)
//!    - Else P seeds a new cluster with the next id; expand it
//!
//! 2. Expansion walks the seed's neighbor list front to back while appending
//!    to it. Each unvisited entry is visited; if it is core, its own
//!    neighbors go on the end of the list. Every entry that is still
//!    unclaimed joins the cluster.
//!
//! ## Complexity
//!
//! Region queries scan the whole store, so a run is O(n²) distance
//! evaluations. There is no spatial index; neighbor order is store order.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use tracing::{debug, trace};

use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::point::{Label, Point, PointStore};

/// Flat label used for noise by [`Clustering::fit_predict`].
pub const NOISE: usize = usize::MAX;

/// Parameters for a DBSCAN run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DbscanParams {
    /// Maximum distance for two points to be neighbors (inclusive).
    pub epsilon: f32,
    /// Minimum neighborhood size, counting the point itself.
    pub min_pts: usize,
    /// Let expansion pull points already labelled noise into the cluster as
    /// border points. When false, only unlabelled points are absorbed and
    /// earlier noise stays noise.
    pub reclaim_noise: bool,
}

impl Default for DbscanParams {
    fn default() -> Self {
        Self {
            epsilon: 0.5,
            min_pts: 5,
            reclaim_noise: true,
        }
    }
}

/// A cluster found by a run: its id and the store indices of its members.
///
/// Members are kept in the order they were absorbed; the seed comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cluster {
    id: usize,
    members: Vec<usize>,
}

impl Cluster {
    fn new(id: usize) -> Self {
        Self {
            id,
            members: Vec::new(),
        }
    }

    /// Cluster id, assigned 0, 1, 2, … in discovery order.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Store indices of the members, in absorption order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the cluster has no members. Never true for a finished run.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the point at `idx` is a member.
    pub fn contains(&self, idx: usize) -> bool {
        self.members.contains(&idx)
    }

    /// Resolve member indices against the store they were computed from.
    pub fn points<'a>(&'a self, store: &'a PointStore) -> impl Iterator<Item = &'a Point> + 'a {
        self.members.iter().map(move |&idx| &store[idx])
    }
}

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone, Default)]
pub struct Dbscan {
    params: DbscanParams,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum neighborhood size (including the point) for a core point.
    pub fn new(epsilon: f32, min_pts: usize) -> Self {
        Self::from_params(DbscanParams {
            epsilon,
            min_pts,
            ..DbscanParams::default()
        })
    }

    /// Create a clusterer from a parameter set.
    pub fn from_params(params: DbscanParams) -> Self {
        Self { params }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.params.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.params.min_pts = min_pts;
        self
    }

    /// Set whether expansion may relabel earlier noise as border points.
    pub fn with_reclaim_noise(mut self, reclaim_noise: bool) -> Self {
        self.params.reclaim_noise = reclaim_noise;
        self
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f32 {
        self.params.epsilon
    }

    /// Minimum neighborhood size.
    pub fn min_pts(&self) -> usize {
        self.params.min_pts
    }

    /// Full parameter set.
    pub fn params(&self) -> &DbscanParams {
        &self.params
    }

    fn validate(&self, store: &PointStore) -> Result<()> {
        // Also rejects NaN.
        if !(self.params.epsilon >= 0.0 && self.params.epsilon.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be finite and non-negative",
            });
        }

        if self.params.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        if let Some(index) = store.iter().position(|p| !p.is_finite()) {
            return Err(Error::NonFiniteCoordinate { index });
        }

        Ok(())
    }

    /// Indices of every point within epsilon of the point at `idx`, the
    /// point itself included, in store order.
    pub fn region_query(&self, store: &PointStore, idx: usize) -> Vec<usize> {
        let point = &store[idx];
        store
            .iter()
            .enumerate()
            .filter(|(_, other)| point.distance(other) <= self.params.epsilon)
            .map(|(idx, _)| idx)
            .collect()
    }

    fn claims(&self, label: Label) -> bool {
        match label {
            Label::Unassigned => true,
            Label::Noise => self.params.reclaim_noise,
            Label::Cluster(_) => false,
        }
    }

    /// Grow `cluster` from a visited core point and its neighbor list.
    fn expand_cluster(
        &self,
        store: &mut PointStore,
        seed: usize,
        mut neighbors: Vec<usize>,
        cluster: &mut Cluster,
    ) {
        store.point_mut(seed).label = Label::Cluster(cluster.id);
        cluster.members.push(seed);

        // The worklist grows while we walk it; entries are never removed.
        let mut i = 0;
        while i < neighbors.len() {
            let idx = neighbors[i];
            i += 1;

            if !store[idx].visited {
                store.point_mut(idx).visited = true;
                let reachable = self.region_query(store, idx);
                if reachable.len() >= self.params.min_pts {
                    neighbors.extend(reachable);
                }
            }

            // Duplicates in the worklist are filtered here: a claimed point
            // carries a cluster label and is skipped.
            if self.claims(store[idx].label) {
                store.point_mut(idx).label = Label::Cluster(cluster.id);
                cluster.members.push(idx);
            }
        }
    }

    /// Run DBSCAN over `store`, labelling its points in place.
    ///
    /// Labels and visited flags from any earlier run are cleared first. On
    /// error the store is left exactly as it was.
    pub fn process(&self, store: &mut PointStore) -> Result<Vec<Cluster>> {
        self.validate(store)?;
        store.reset();

        debug!(
            points = store.len(),
            epsilon = self.params.epsilon,
            min_pts = self.params.min_pts,
            "dbscan run started"
        );

        let mut clusters: Vec<Cluster> = Vec::new();

        for idx in 0..store.len() {
            if store[idx].visited {
                continue;
            }
            store.point_mut(idx).visited = true;

            let neighbors = self.region_query(store, idx);
            if neighbors.len() < self.params.min_pts {
                store.point_mut(idx).label = Label::Noise;
                trace!(point = idx, neighbors = neighbors.len(), "marked noise");
                continue;
            }

            let mut cluster = Cluster::new(clusters.len());
            self.expand_cluster(store, idx, neighbors, &mut cluster);
            trace!(cluster = cluster.id, size = cluster.len(), seed = idx, "cluster expanded");
            clusters.push(cluster);
        }

        debug!(
            clusters = clusters.len(),
            noise = store.noise_points().count(),
            "dbscan run finished"
        );

        Ok(clusters)
    }
}

impl Clustering for Dbscan {
    fn fit(&self, store: &mut PointStore) -> Result<Vec<Cluster>> {
        self.process(store)
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;

    /// Check if a flat label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        let mut store = PointStore::from_coords(data)?;
        self.process(&mut store)?;
        Ok(store.labels())
    }
}

/// Outcome of [`cluster`]: the clusters plus the labelled points.
#[derive(Debug, Clone)]
pub struct Clustered {
    /// Clusters in discovery order.
    pub clusters: Vec<Cluster>,
    /// The input points, carrying their final labels.
    pub points: PointStore,
}

impl Clustered {
    /// Indices of noise points, in input order.
    pub fn noise_indices(&self) -> Vec<usize> {
        self.points.noise_indices()
    }

    /// One entry per input point: `Some(cluster_id)` or `None` for noise.
    pub fn labels(&self) -> Vec<Option<usize>> {
        self.points.labels()
    }
}

/// Cluster coordinate rows (2 or 3 values each) with default noise handling.
///
/// ```rust
/// let data = vec![vec![0.0, 0.0], vec![0.1, 0.0], vec![0.0, 0.1], vec![9.0, 9.0]];
/// let out = pointscan::cluster(&data, 0.3, 3).unwrap();
/// assert_eq!(out.clusters.len(), 1);
/// assert_eq!(out.noise_indices(), vec![3]);
/// ```
pub fn cluster(points: &[Vec<f32>], epsilon: f32, min_pts: usize) -> Result<Clustered> {
    let dbscan = Dbscan::new(epsilon, min_pts);
    let mut store = PointStore::from_coords(points)?;
    let clusters = dbscan.process(&mut store)?;
    Ok(Clustered {
        clusters,
        points: store,
    })
}
