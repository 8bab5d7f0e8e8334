//! 2D partition tree (kd-tree) over alternating coordinate axes.
//!
//! Nodes live in a single arena and reference their children by index, so the
//! tree owns every node exactly once and no traversal needs recursion. Each node
//! stores the region its subtree is confined to; the region is computed from the
//! parent when the node is created and never recomputed.
//!
//! The tree is not rebalanced. Random insertion order gives O(log n) average
//! depth, sorted insertion order degrades it to a chain of length n.

use crate::error::{Error, Result, check_point, check_rect};
use crate::geometry::{Axis, Point, Rect};
use log::{debug, trace};

/// Marks an empty child slot
pub(crate) const NIL: usize = usize::MAX;

/// One stored point together with its split axis and subtree region
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    /// Coordinate compared against `point` when descending
    pub(crate) axis: Axis,
    /// Rectangle containing this node and its whole subtree
    pub(crate) region: Rect,
    /// Points whose compared coordinate is `<` this node's
    pub(crate) left: usize,
    /// Points whose compared coordinate is `>=` this node's
    pub(crate) right: usize,
}

impl Node {
    fn new(point: Point, axis: Axis, region: Rect) -> Self {
        Node { point, axis, region, left: NIL, right: NIL }
    }

    /// True when `point` descends into the right (`>=`) subtree
    #[inline]
    pub(crate) fn goes_right(&self, point: Point) -> bool {
        self.axis.coord(point) >= self.axis.coord(self.point)
    }

    /// Child slot `point` descends into
    #[inline]
    pub(crate) fn child_for(&self, point: Point) -> usize {
        if self.goes_right(point) { self.right } else { self.left }
    }
}

/// Set of distinct 2D points supporting membership, range and nearest-neighbor queries.
///
/// The root compares x, its children compare y, and so on. Ties on the compared
/// coordinate go to the right subtree.
///
/// # Examples
/// ```
/// use kdtree2d::{KdTree, Point, Rect};
///
/// let mut tree = KdTree::new();
/// tree.insert(Point::new(0.5, 0.5))?;
/// tree.insert(Point::new(0.25, 0.25))?;
/// tree.insert(Point::new(0.75, 0.75))?;
///
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(Point::new(0.25, 0.25))?);
///
/// let inside = tree.range(Rect::new(0.0, 0.0, 0.6, 0.6))?;
/// assert_eq!(inside.len(), 2);
///
/// assert_eq!(tree.nearest(Point::new(0.6, 0.6))?, Some(Point::new(0.5, 0.5)));
/// # Ok::<(), kdtree2d::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct KdTree {
    /// Arena of nodes, root at index 0 when non-empty
    pub(crate) nodes: Vec<Node>,
    /// Region of the root: every stored point lies inside it
    pub(crate) bounds: Rect,
}

impl KdTree {
    /// Creates an empty tree over the unit square
    pub fn new() -> Self {
        KdTree::with_capacity(0)
    }

    /// Creates an empty tree over the unit square with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        KdTree {
            nodes: Vec::with_capacity(capacity),
            bounds: Rect::unit(),
        }
    }

    /// Creates an empty tree whose points must lie within `bounds`
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `bounds` has non-finite or unordered corners.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point, Rect};
    ///
    /// let mut tree = KdTree::with_bounds(Rect::new(-100.0, -100.0, 100.0, 100.0))?;
    /// tree.insert(Point::new(-42.0, 17.5))?;
    /// assert!(tree.insert(Point::new(500.0, 0.0)).is_err());
    /// # Ok::<(), kdtree2d::Error>(())
    /// ```
    pub fn with_bounds(bounds: Rect) -> Result<Self> {
        KdTree::with_bounds_and_capacity(bounds, 0)
    }

    /// Creates an empty tree over `bounds` with room for `capacity` points
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `bounds` has non-finite or unordered corners.
    pub fn with_bounds_and_capacity(bounds: Rect, capacity: usize) -> Result<Self> {
        check_rect(&bounds)?;
        debug!("Creating kd-tree over {bounds} with capacity {capacity}");
        Ok(KdTree {
            nodes: Vec::with_capacity(capacity),
            bounds,
        })
    }

    /// Returns the number of distinct points stored
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Region every stored point is confined to
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Adds `point` to the set.
    ///
    /// Returns `Ok(true)` if a new node was created and `Ok(false)` if an equal
    /// point was already stored, in which case the tree is left untouched.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for a point with a non-finite coordinate
    /// or one lying outside [`KdTree::bounds`].
    pub fn insert(&mut self, point: Point) -> Result<bool> {
        check_point(point)?;
        if !self.bounds.contains(point) {
            debug!("Rejecting insert of {point}: outside tree bounds {}", self.bounds);
            return Err(Error::InvalidArgument(format!(
                "point {point} lies outside the tree bounds {}",
                self.bounds
            )));
        }

        if self.nodes.is_empty() {
            trace!("Creating root node at {point}");
            self.nodes.push(Node::new(point, Axis::X, self.bounds));
            return Ok(true);
        }

        let mut current = 0;
        loop {
            let node = &self.nodes[current];
            if node.point == point {
                trace!("Ignoring duplicate point {point}");
                return Ok(false);
            }

            let go_right = node.goes_right(point);
            let child = if go_right { node.right } else { node.left };
            if child != NIL {
                current = child;
                continue;
            }

            let (below, above) = node.region.split(node.axis, node.point);
            let region = if go_right { above } else { below };
            let axis = node.axis.flip();
            let index = self.nodes.len();
            trace!("Creating node {index} at {point} ({axis:?} split, region {region})");
            self.nodes.push(Node::new(point, axis, region));

            let parent = &mut self.nodes[current];
            if go_right {
                parent.right = index;
            } else {
                parent.left = index;
            }
            return Ok(true);
        }
    }

    /// Returns whether an equal point is stored.
    ///
    /// Follows the same path an insert of `point` would take.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for a point with a non-finite coordinate.
    pub fn contains(&self, point: Point) -> Result<bool> {
        check_point(point)?;
        if self.nodes.is_empty() {
            return Ok(false);
        }

        let mut current = 0;
        while current != NIL {
            let node = &self.nodes[current];
            if node.point == point {
                return Ok(true);
            }
            current = node.child_for(point);
        }
        Ok(false)
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}
