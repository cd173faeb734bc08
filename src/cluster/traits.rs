use super::dbscan::{Cluster, NOISE};
use crate::error::Result;
use crate::point::PointStore;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Label `store` in place and return the clusters found, in discovery order.
    fn fit(&self, store: &mut PointStore) -> Result<Vec<Cluster>>;

    /// Build a store from coordinate rows, fit it, and return one label per row.
    ///
    /// Noise points are labelled [`NOISE`].
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let mut store = PointStore::from_coords(data)?;
        self.fit(&mut store)?;
        Ok(store
            .labels()
            .into_iter()
            .map(|l| l.unwrap_or(NOISE))
            .collect())
    }
}
