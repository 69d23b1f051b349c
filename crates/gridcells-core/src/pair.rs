//! The [`Pair2D`] value type.

use crate::axis::Axis;
use std::fmt;

/// An ordered pair of per-axis values named `x` and `y`.
///
/// Used both for scalar quantities (an arena's width and height, the
/// sampling step on each axis) and for per-axis sequences (the coordinate
/// axes produced by discretising an arena).
///
/// # Examples
///
/// ```
/// use gridcells_core::{Axis, Pair2D};
///
/// let size = Pair2D::new(4.0, 2.0);
/// assert_eq!(size.get(Axis::Y), &2.0);
/// assert_eq!(size.map(|v| v / 2.0), Pair2D::new(2.0, 1.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Pair2D<T> {
    /// Value along the x axis.
    pub x: T,
    /// Value along the y axis.
    pub y: T,
}

impl<T> Pair2D<T> {
    /// Create a pair from its two components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Borrow the component for `axis`.
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Apply `f` to both components.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair2D<U> {
        Pair2D {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Combine two pairs componentwise.
    pub fn zip<U, V>(self, other: Pair2D<U>, mut f: impl FnMut(T, U) -> V) -> Pair2D<V> {
        Pair2D {
            x: f(self.x, other.x),
            y: f(self.y, other.y),
        }
    }

    /// Borrow both components as a pair of references.
    pub fn each_ref(&self) -> Pair2D<&T> {
        Pair2D {
            x: &self.x,
            y: &self.y,
        }
    }

    /// Split into an `(x, y)` tuple.
    pub fn into_tuple(self) -> (T, T) {
        (self.x, self.y)
    }
}

impl<T: Clone> Pair2D<T> {
    /// A pair with the same value on both axes.
    pub fn splat(value: T) -> Self {
        Self {
            x: value.clone(),
            y: value,
        }
    }
}

impl<T> From<(T, T)> for Pair2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<Pair2D<T>> for (T, T) {
    fn from(p: Pair2D<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T: fmt::Display> fmt::Display for Pair2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_selects_axis() {
        let p = Pair2D::new(1, 2);
        assert_eq!(*p.get(Axis::X), 1);
        assert_eq!(*p.get(Axis::Y), 2);
    }

    #[test]
    fn splat_repeats_value() {
        assert_eq!(Pair2D::splat(3.5), Pair2D::new(3.5, 3.5));
    }

    #[test]
    fn zip_combines_componentwise() {
        let size = Pair2D::new(4.0, 6.0);
        let step = Pair2D::new(1.0, 2.0);
        assert_eq!(size.zip(step, |s, q| s / q), Pair2D::new(4.0, 3.0));
    }

    #[test]
    fn tuple_conversions() {
        let p: Pair2D<i32> = (5, 7).into();
        assert_eq!(p, Pair2D::new(5, 7));
        let t: (i32, i32) = p.into();
        assert_eq!(t, (5, 7));
    }

    #[test]
    fn display_formats_both_components() {
        assert_eq!(Pair2D::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn map_over_sequences() {
        let axes = Pair2D::new(vec![1.0, 2.0], vec![3.0]);
        let lens = axes.each_ref().map(Vec::len);
        assert_eq!(lens, Pair2D::new(2, 1));
    }
}
