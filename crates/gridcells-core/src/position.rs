//! The [`Position2D`] value type.

use crate::pair::Pair2D;
use std::fmt;

/// A location in the plane, such as one sample of a walked path.
///
/// Structurally identical to [`Pair2D`], but kept as a distinct type so
/// that sizes and locations cannot be mixed up at call sites. Arena
/// coordinates are centered at the origin; callers must transform their
/// positions into that frame before querying an arena.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position2D<T> {
    /// Coordinate along the x axis.
    pub x: T,
    /// Coordinate along the y axis.
    pub y: T,
}

impl<T> Position2D<T> {
    /// Create a position from its coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Position2D<f64> {
    /// The origin, `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Euclidean distance from the origin.
    ///
    /// Computed as `sqrt(x² + y²)`, the same expression arena masks use, so
    /// a position and the grid point at the same coordinates always agree.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Self) -> f64 {
        Self::new(self.x - other.x, self.y - other.y).norm()
    }
}

impl<T> From<Pair2D<T>> for Position2D<T> {
    fn from(p: Pair2D<T>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl<T> From<Position2D<T>> for Pair2D<T> {
    fn from(p: Position2D<T>) -> Self {
        Pair2D::new(p.x, p.y)
    }
}

impl<T> From<(T, T)> for Position2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Position2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
