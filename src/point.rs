//! Points and the point store the clustering engine labels in place.
//!
//! A [`PointStore`] is a flat arena: points never move once pushed, and every
//! other structure in the crate (clusters, neighbor lists, the expansion
//! worklist) refers to them by their `usize` index.

use std::ops::Index;

use crate::error::{Error, Result};

/// Cluster assignment of a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Not yet classified in the current run.
    #[default]
    Unassigned,
    /// Too few neighbors to seed a cluster and not (yet) reached by one.
    Noise,
    /// Member of the cluster with this id.
    Cluster(usize),
}

impl Label {
    /// Whether this label marks noise.
    #[inline]
    pub fn is_noise(self) -> bool {
        matches!(self, Label::Noise)
    }

    /// The cluster id, if the point belongs to a cluster.
    #[inline]
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }

    /// Whether the point has been classified (noise or cluster).
    #[inline]
    pub fn is_assigned(self) -> bool {
        !matches!(self, Label::Unassigned)
    }
}

/// A point in 3D space. 2D points have `z == 0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate (0 for 2D input).
    pub z: f32,
    pub(crate) label: Label,
    pub(crate) visited: bool,
}

impl Point {
    /// Create a 2D point.
    pub fn new(x: f32, y: f32) -> Self {
        Self::new_3d(x, y, 0.0)
    }

    /// Create a 3D point.
    pub fn new_3d(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            label: Label::Unassigned,
            visited: false,
        }
    }

    /// Create a point from a slice of 2 or 3 coordinates.
    pub fn from_coords(coords: &[f32]) -> Result<Self> {
        Self::parse(coords, 0)
    }

    fn parse(coords: &[f32], index: usize) -> Result<Self> {
        let point = match *coords {
            [x, y] => Self::new(x, y),
            [x, y, z] => Self::new_3d(x, y, z),
            _ => {
                return Err(Error::InvalidDimension {
                    index,
                    found: coords.len(),
                })
            }
        };
        if !point.is_finite() {
            return Err(Error::NonFiniteCoordinate { index });
        }
        Ok(point)
    }

    /// Coordinates as `[x, y, z]`.
    #[inline]
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f32 {
        crate::cluster::util::euclidean(&self.position(), &other.position())
    }

    /// Current label.
    #[inline]
    pub fn label(&self) -> Label {
        self.label
    }

    /// Whether the last run classified this point as noise.
    #[inline]
    pub fn is_noise(&self) -> bool {
        self.label.is_noise()
    }

    /// Cluster id assigned by the last run, if any.
    #[inline]
    pub fn cluster_id(&self) -> Option<usize> {
        self.label.cluster_id()
    }

    /// Whether the last run visited this point.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    fn reset(&mut self) {
        self.label = Label::Unassigned;
        self.visited = false;
    }
}

/// Ordered, index-addressed collection of points.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Build a store from rows of 2 or 3 coordinates.
    ///
    /// Fails on the first row with the wrong number of coordinates or a
    /// non-finite value; the error carries that row's index.
    pub fn from_coords(rows: &[Vec<f32>]) -> Result<Self> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| Point::parse(row, index))
            .collect::<Result<Vec<_>>>()
            .map(|points| Self { points })
    }

    /// Append a point and return its index.
    pub fn push(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `idx`, if in range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Point> {
        self.points.get(idx)
    }

    /// Iterate points in store order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// All points as a slice.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Clear every label and visited flag so the store can be clustered again.
    pub fn reset(&mut self) {
        self.points.iter_mut().for_each(Point::reset);
    }

    /// Indices of points labelled noise, in store order.
    pub fn noise_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_noise())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Points labelled noise, in store order.
    pub fn noise_points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter().filter(|p| p.is_noise())
    }

    /// One entry per point: `Some(cluster_id)` or `None` for noise/unassigned.
    pub fn labels(&self) -> Vec<Option<usize>> {
        self.points.iter().map(Point::cluster_id).collect()
    }

    pub(crate) fn point_mut(&mut self, idx: usize) -> &mut Point {
        &mut self.points[idx]
    }
}

impl Index<usize> for PointStore {
    type Output = Point;

    fn index(&self, idx: usize) -> &Point {
        &self.points[idx]
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
