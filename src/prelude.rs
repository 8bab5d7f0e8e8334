//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdtree2d::prelude::*;
//! ```

#[doc(hidden)]
pub use crate::PointSet;
pub use crate::{Error, KdTree, Point, Rect};
