//! Geometry primitives: points, axis-aligned rectangles and split axes.
//!
//! All comparisons are boundary inclusive. `Rect::distance_squared_to` is the
//! lower bound used for branch-and-bound pruning, so it never overestimates.

use std::fmt;

/// Point in the plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns true when neither coordinate is NaN or infinite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Squared Euclidean distance to another point
    #[inline]
    pub fn distance_squared_to(&self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate compared by a tree node.
///
/// `X` nodes split their region with a vertical line, `Y` nodes with a
/// horizontal one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Compare x, split with a vertical line
    X,
    /// Compare y, split with a horizontal line
    Y,
}

impl Axis {
    /// Axis used by the children of a node comparing `self`
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Coordinate of `point` along this axis
    #[inline]
    pub fn coord(self, point: Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}

/// Axis-aligned rectangle: min_x, min_y, max_x, max_y
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge
    pub min_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Right edge
    pub max_x: f64,
    /// Top edge
    pub max_y: f64,
}

impl Rect {
    /// Creates a new rectangle. Use [`Rect::is_valid`] to check the corners are ordered.
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// The unit square [0, 1] x [0, 1]
    pub const fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Left edge
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Bottom edge
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Top edge
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Extent along x
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along y
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Finite corners with min <= max on both axes
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Point containment, boundary inclusive
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// Rectangles overlap or touch
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Squared distance from `point` to the closest point of the rectangle.
    ///
    /// Zero when the point is inside or on the boundary.
    #[inline]
    pub fn distance_squared_to(&self, point: Point) -> f64 {
        let dx = axis_distance(point.x, self.min_x, self.max_x);
        let dy = axis_distance(point.y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Euclidean distance from `point` to the rectangle, zero inside
    pub fn distance_to(&self, point: Point) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// Cuts the rectangle with a line through `point` perpendicular to `axis`.
    ///
    /// Returns `(below, above)`: `below` holds the side where the compared
    /// coordinate is smaller than the point's, `above` the `>=` side. Both
    /// halves share the cut line.
    pub fn split(&self, axis: Axis, point: Point) -> (Self, Self) {
        match axis {
            Axis::X => (
                Self::new(self.min_x, self.min_y, point.x, self.max_y),
                Self::new(point.x, self.min_y, self.max_x, self.max_y),
            ),
            Axis::Y => (
                Self::new(self.min_x, self.min_y, self.max_x, point.y),
                Self::new(self.min_x, point.y, self.max_x, self.max_y),
            ),
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::unit()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.min_x, self.max_x, self.min_y, self.max_y)
    }
}

/// Distance along one axis from a coordinate to the interval [min, max]
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}
