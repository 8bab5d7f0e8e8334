//! Error type shared by the tree and the reference point set.

use crate::geometry::{Point, Rect};
use thiserror::Error;

/// Errors raised by point set operations
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An argument was NaN, infinite, out of bounds or an unordered rectangle
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for fallible point set operations
pub type Result<T> = std::result::Result<T, Error>;

/// Rejects points with NaN or infinite coordinates
pub(crate) fn check_point(point: Point) -> Result<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("point {point} has a non-finite coordinate")))
    }
}

/// Rejects rectangles with non-finite or unordered corners
pub(crate) fn check_rect(rect: &Rect) -> Result<()> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!("rectangle {rect} is not a valid bounding box")))
    }
}
