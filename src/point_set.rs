//! Linear-scan reference point set

use crate::error::{Result, check_point, check_rect};
use crate::geometry::{Point, Rect};

/// Brute-force point set used as a reference for [`crate::KdTree`]
///
/// Stores points in an unordered vector and answers every query with a linear
/// scan. No pruning and no bounds; only useful to check the tree's answers.
///
/// # Examples
/// ```
/// use kdtree2d::{Point, PointSet, Rect};
///
/// let mut set = PointSet::new();
/// set.insert(Point::new(0.2, 0.2))?;
/// set.insert(Point::new(0.2, 0.2))?;
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.range(Rect::unit())?.len(), 1);
/// # Ok::<(), kdtree2d::Error>(())
/// ```
#[doc(hidden)]
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    pub(crate) points: Vec<Point>,
}

impl PointSet {
    /// Creates a new empty point set
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new point set with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    /// Adds the point unless an equal one is stored; returns whether it was added
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for a point with a non-finite coordinate.
    pub fn insert(&mut self, point: Point) -> Result<bool> {
        check_point(point)?;
        if self.points.contains(&point) {
            return Ok(false);
        }
        self.points.push(point);
        Ok(true)
    }

    /// Returns whether an equal point is stored
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for a point with a non-finite coordinate.
    pub fn contains(&self, point: Point) -> Result<bool> {
        check_point(point)?;
        Ok(self.points.contains(&point))
    }

    /// All points inside `rect`, boundary inclusive, in insertion order
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `rect` has non-finite or unordered corners.
    pub fn range(&self, rect: Rect) -> Result<Vec<Point>> {
        check_rect(&rect)?;
        Ok(self.points.iter().copied().filter(|p| rect.contains(*p)).collect())
    }

    /// First point found at the minimum squared distance; `None` only when empty
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for a point with a non-finite coordinate.
    pub fn nearest(&self, point: Point) -> Result<Option<Point>> {
        check_point(point)?;
        let mut best = None;
        let mut best_dist = f64::INFINITY;
        for &candidate in &self.points {
            // Squared distances of far apart points overflow to infinity
            let dist = candidate.distance_squared_to(point);
            if best.is_none() || dist < best_dist {
                best_dist = dist;
                best = Some(candidate);
            }
        }
        Ok(best)
    }

    /// Up to `k` points sorted by distance to `point`
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for a point with a non-finite coordinate.
    pub fn nearest_k(&self, point: Point, k: usize) -> Result<Vec<Point>> {
        check_point(point)?;
        let mut distances: Vec<(f64, Point)> =
            self.points.iter().map(|&p| (p.distance_squared_to(point), p)).collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));
        distances.truncate(k);
        Ok(distances.into_iter().map(|(_, p)| p).collect())
    }

    /// Returns the number of points in the set
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
