//! # kdtree2d - 2D Partition Tree Point Set
//!
//! A Rust library maintaining a set of distinct points in the plane and answering
//! membership, orthogonal range and nearest-neighbor queries with a 2D kd-tree.
//!
//! ## Features
//!
//! - **Alternating Axes**: The root splits on x, its children on y, and so on
//! - **Region Pruning**: Every node stores the rectangle its subtree lives in, so range and
//!   nearest-neighbor searches skip subtrees that cannot contribute
//! - **Deduplication**: Inserting a point that is already stored is a no-op
//! - **Stack Safe**: Nodes live in an index-based arena and all traversals are iterative
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree2d::prelude::*;
//!
//! // Create a tree over the unit square
//! let mut tree = KdTree::new();
//!
//! tree.insert(Point::new(0.5, 0.5))?;
//! tree.insert(Point::new(0.25, 0.25))?;
//! tree.insert(Point::new(0.75, 0.75))?;
//! tree.insert(Point::new(0.5, 0.5))?; // duplicate, ignored
//! assert_eq!(tree.len(), 3);
//!
//! // Points inside a rectangle (boundary inclusive)
//! let mut found = tree.range(Rect::new(0.0, 0.0, 0.6, 0.6))?;
//! found.sort_by(|a, b| a.x.total_cmp(&b.x));
//! assert_eq!(found, vec![Point::new(0.25, 0.25), Point::new(0.5, 0.5)]);
//!
//! // Closest stored point
//! assert_eq!(tree.nearest(Point::new(0.6, 0.6))?, Some(Point::new(0.5, 0.5)));
//! # Ok::<(), kdtree2d::Error>(())
//! ```
//!
//! ## How It Works
//!
//! Each insert walks down from the root comparing one coordinate per level; ties go
//! right. A new node's region is the half of its parent's region on its side of the
//! parent's split line, computed once when the node is created.
//!
//! The tree is never rebalanced: random insertion order gives logarithmic average
//! depth, sorted insertion order produces a chain.

pub mod error;
pub mod geometry;
pub mod kdtree;
pub mod point_set;
pub mod prelude;
pub mod queries;

pub use error::{Error, Result};
pub use geometry::{Axis, Point, Rect};
pub use kdtree::KdTree;
#[doc(hidden)]
pub use point_set::PointSet;
pub use queries::Iter;
