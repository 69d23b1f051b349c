//! Validated arena extents and their per-axis discretisation.

use crate::error::{check_positive, ArenaError};
use crate::grid::Axes;
use gridcells_core::{Axis, Pair2D, Position2D};
use ndarray::Array1;

/// The size of an arena along each axis together with the sampling step.
///
/// Every arena shape holds one `Extent` and delegates discretisation to it.
/// The coordinate system is centered at the origin: the axis for each
/// dimension spans `[-size / 2, +size / 2]`.
///
/// Invariants (checked by [`Extent::new`]):
/// - every size and step component is finite and `> 0`
/// - `step <= size` on each axis, so every axis has at least two points
/// - no axis has more than [`Extent::MAX_AXIS_POINTS`] points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    size: Pair2D<f64>,
    step: Pair2D<f64>,
}

impl Extent {
    /// Maximum number of samples along a single axis.
    pub const MAX_AXIS_POINTS: usize = 1 << 24;

    /// Validate and create an extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridcells_arena::Extent;
    /// use gridcells_core::{Axis, Pair2D};
    ///
    /// let extent = Extent::new(Pair2D::new(4.0, 2.0), Pair2D::new(1.0, 0.5)).unwrap();
    /// assert_eq!(extent.axis_len(Axis::X), 5);
    /// assert_eq!(extent.grid_shape(), (5, 5));
    ///
    /// assert!(Extent::new(Pair2D::new(1.0, 1.0), Pair2D::new(2.0, 1.0)).is_err());
    /// ```
    pub fn new(size: Pair2D<f64>, step: Pair2D<f64>) -> Result<Self, ArenaError> {
        check_positive("size.x", size.x)?;
        check_positive("size.y", size.y)?;
        check_positive("step.x", step.x)?;
        check_positive("step.y", step.y)?;
        for axis in Axis::ALL {
            let (&s, &q) = (size.get(axis), step.get(axis));
            if q > s {
                return Err(ArenaError::StepExceedsSize {
                    axis,
                    step: q,
                    size: s,
                });
            }
            let points = (s / q).floor() + 1.0;
            if points > Self::MAX_AXIS_POINTS as f64 {
                return Err(ArenaError::TooManyPoints {
                    axis,
                    points,
                    max: Self::MAX_AXIS_POINTS,
                });
            }
        }
        Ok(Self { size, step })
    }

    /// Extent along each axis.
    pub fn size(&self) -> Pair2D<f64> {
        self.size
    }

    /// Requested sampling step along each axis.
    pub fn step(&self) -> Pair2D<f64> {
        self.step
    }

    /// Half of the extent along each axis: the largest coordinate value.
    pub fn half_size(&self) -> Pair2D<f64> {
        self.size.map(|s| s / 2.0)
    }

    /// Number of sample points along `axis`: `floor(size / step) + 1`.
    ///
    /// When `size / step` is not integral the quotient is truncated, so
    /// the realised spacing (see [`realised_step`](Self::realised_step))
    /// is slightly larger than the requested step.
    pub fn axis_len(&self, axis: Axis) -> usize {
        (self.size.get(axis) / self.step.get(axis)).floor() as usize + 1
    }

    /// Actual spacing between consecutive samples along `axis`.
    pub fn realised_step(&self, axis: Axis) -> f64 {
        self.size.get(axis) / (self.axis_len(axis) - 1) as f64
    }

    /// Shape of the full grid as `(rows, cols)` = `(len(y), len(x))`.
    pub fn grid_shape(&self) -> (usize, usize) {
        (self.axis_len(Axis::Y), self.axis_len(Axis::X))
    }

    /// Coordinate values along `axis`, ascending from `-size/2` to `+size/2`.
    pub fn axis(&self, axis: Axis) -> Array1<f64> {
        let half = self.size.get(axis) / 2.0;
        linspace(-half, half, self.axis_len(axis))
    }

    /// Coordinate values along both axes.
    pub fn axes(&self) -> Axes {
        Pair2D::new(self.axis(Axis::X), self.axis(Axis::Y))
    }

    /// Whether `position` lies inside the centered box, boundary included.
    pub fn contains(&self, position: &Position2D<f64>) -> bool {
        let half = self.half_size();
        position.x.abs() <= half.x && position.y.abs() <= half.y
    }
}

/// `n` evenly spaced values from `start` to `end`, both endpoints included.
///
/// The last value is pinned to `end` so accumulated rounding never moves
/// the upper edge of the arena.
fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    debug_assert!(n >= 2, "extent invariants guarantee two points per axis");
    let delta = (end - start) / (n - 1) as f64;
    Array1::from_shape_fn(n, |i| {
        if i + 1 == n {
            end
        } else {
            start + delta * i as f64
        }
    })
}
