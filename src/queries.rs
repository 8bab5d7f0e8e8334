//! Query implementations for [`KdTree`]
//!
//! Range search, nearest-neighbor search and traversal. All of them walk the
//! arena with an explicit stack and prune subtrees by their stored region.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::KdTree;
use crate::error::{Result, check_point, check_rect};
use crate::geometry::{Point, Rect};
use crate::kdtree::{NIL, Node};

impl KdTree {
    /// Returns every stored point inside `rect`, boundary inclusive.
    ///
    /// The order of the result is unspecified.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `rect` has non-finite or unordered corners.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point, Rect};
    ///
    /// let mut tree = KdTree::new();
    /// tree.insert(Point::new(0.1, 0.1))?;
    /// tree.insert(Point::new(0.9, 0.9))?;
    ///
    /// let found = tree.range(Rect::new(0.0, 0.0, 0.5, 0.5))?;
    /// assert_eq!(found, vec![Point::new(0.1, 0.1)]);
    /// # Ok::<(), kdtree2d::Error>(())
    /// ```
    pub fn range(&self, rect: Rect) -> Result<Vec<Point>> {
        let mut results = Vec::new();
        self.range_into(rect, &mut results)?;
        Ok(results)
    }

    /// Appends every stored point inside `rect` to `results`.
    ///
    /// `results` is not cleared first, so a buffer can be reused across queries.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `rect` has non-finite or unordered corners;
    /// `results` is left untouched.
    pub fn range_into(&self, rect: Rect, results: &mut Vec<Point>) -> Result<()> {
        check_rect(&rect)?;
        if self.nodes.is_empty() {
            return Ok(());
        }

        let mut stack = vec![0];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if rect.contains(node.point) {
                results.push(node.point);
            }
            // Right pushed first so the left subtree is visited first
            for child in [node.right, node.left] {
                if child != NIL && rect.intersects(&self.nodes[child].region) {
                    stack.push(child);
                }
            }
        }
        Ok(())
    }

    /// Returns a stored point closest to `point`, or `None` for an empty tree.
    ///
    /// When several points are equally close, which one is returned depends on
    /// the traversal order.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for a point with a non-finite coordinate.
    pub fn nearest(&self, point: Point) -> Result<Option<Point>> {
        check_point(point)?;
        if self.nodes.is_empty() {
            return Ok(None);
        }

        let mut best = None;
        let mut best_dist = f64::INFINITY;

        let mut stack = vec![0];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            if best.is_some() && node.region.distance_squared_to(point) >= best_dist {
                continue;
            }

            // Squared distances of far apart points overflow to infinity
            let dist = node.point.distance_squared_to(point);
            if best.is_none() || dist < best_dist {
                best_dist = dist;
                best = Some(node.point);
            }

            // Near side is pushed last so it is searched first
            let (near, far) = near_far(node, point);
            if far != NIL {
                stack.push(far);
            }
            if near != NIL {
                stack.push(near);
            }
        }
        Ok(best)
    }

    /// Returns up to `k` stored points closest to `point`, nearest first.
    ///
    /// Points at equal distance may appear in any order.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] for a point with a non-finite coordinate.
    ///
    /// # Examples
    /// ```
    /// use kdtree2d::{KdTree, Point};
    ///
    /// let mut tree = KdTree::new();
    /// for &(x, y) in &[(0.1, 0.1), (0.2, 0.2), (0.8, 0.8)] {
    ///     tree.insert(Point::new(x, y))?;
    /// }
    /// let closest = tree.nearest_k(Point::new(0.0, 0.0), 2)?;
    /// assert_eq!(closest, vec![Point::new(0.1, 0.1), Point::new(0.2, 0.2)]);
    /// # Ok::<(), kdtree2d::Error>(())
    /// ```
    pub fn nearest_k(&self, point: Point, k: usize) -> Result<Vec<Point>> {
        check_point(point)?;
        if self.nodes.is_empty() || k == 0 {
            return Ok(Vec::new());
        }

        let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k + 1);
        let mut stack = vec![0];
        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            let bound = worst_distance(&heap, k);
            if bound.is_some_and(|worst| node.region.distance_squared_to(point) >= worst) {
                continue;
            }

            let dist = node.point.distance_squared_to(point);
            if bound.is_none_or(|worst| dist < worst) {
                heap.push(Candidate { dist, point: node.point });
                if heap.len() > k {
                    heap.pop();
                }
            }

            let (near, far) = near_far(node, point);
            if far != NIL {
                stack.push(far);
            }
            if near != NIL {
                stack.push(near);
            }
        }

        Ok(heap.into_sorted_vec().into_iter().map(|c| c.point).collect())
    }

    /// Iterates over all stored points, root first (pre-order)
    pub fn iter(&self) -> Iter<'_> {
        let stack = if self.nodes.is_empty() { Vec::new() } else { vec![0] };
        Iter { nodes: &self.nodes, stack }
    }

    /// Collects all stored points in pre-order
    pub fn points(&self) -> Vec<Point> {
        self.iter().collect()
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree
    pub fn height(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }

        let mut height = 0;
        let mut stack = vec![(0, 1)];
        while let Some((index, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[index];
            for child in [node.left, node.right] {
                if child != NIL {
                    stack.push((child, depth + 1));
                }
            }
        }
        height
    }
}

/// Children of `node` ordered (same side as `point`, opposite side)
#[inline]
fn near_far(node: &Node, point: Point) -> (usize, usize) {
    if node.goes_right(point) {
        (node.right, node.left)
    } else {
        (node.left, node.right)
    }
}

/// Pruning bound for a k-nearest search: the k-th best distance once k candidates are held
#[inline]
fn worst_distance(heap: &BinaryHeap<Candidate>, k: usize) -> Option<f64> {
    if heap.len() < k {
        None
    } else {
        heap.peek().map(|c| c.dist)
    }
}

/// Max-heap entry keyed by squared distance
#[derive(Clone, Copy, Debug)]
struct Candidate {
    dist: f64,
    point: Point,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.dist.total_cmp(&other.dist) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist.total_cmp(&other.dist)
    }
}

/// Pre-order iterator over the points of a [`KdTree`]
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    stack: Vec<usize>,
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let index = self.stack.pop()?;
        let node = &self.nodes[index];
        if node.right != NIL {
            self.stack.push(node.right);
        }
        if node.left != NIL {
            self.stack.push(node.left);
        }
        Some(node.point)
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
