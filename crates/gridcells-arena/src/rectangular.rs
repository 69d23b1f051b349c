//! Axis-aligned rectangular arenas.

use crate::arena::Arena;
use crate::error::ArenaError;
use crate::extent::Extent;
use crate::grid::Axes;
use crate::mask::Mask;
use gridcells_core::{Pair2D, Position2D};
use log::debug;

/// A rectangular arena centered at the origin.
///
/// The discretisation samples each axis independently with
/// `floor(size / step) + 1` evenly spaced points from `-size/2` to
/// `+size/2`. Every grid point lies inside a rectangle, so [`Arena::mask`]
/// always returns `None`.
///
/// # Examples
///
/// ```
/// use gridcells_arena::{Arena, RectangularArena};
/// use gridcells_core::Pair2D;
///
/// let arena = RectangularArena::new(Pair2D::new(4.0, 2.0), Pair2D::new(1.0, 1.0)).unwrap();
/// let axes = arena.discretisation();
/// assert_eq!(axes.x.to_vec(), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
/// assert_eq!(axes.y.to_vec(), vec![-1.0, 0.0, 1.0]);
/// assert!(arena.mask().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RectangularArena {
    extent: Extent,
}

impl RectangularArena {
    /// Create a rectangular arena with the given extent and step.
    ///
    /// Returns `Err(ArenaError)` if any component is non-positive or
    /// non-finite, or if a step exceeds the size along its axis.
    pub fn new(size: Pair2D<f64>, step: Pair2D<f64>) -> Result<Self, ArenaError> {
        let extent = Extent::new(size, step)?;
        debug!(
            "rectangular arena: size {size}, step {step}, grid {:?}",
            extent.grid_shape()
        );
        Ok(Self { extent })
    }

    /// Extent along each axis.
    pub fn size(&self) -> Pair2D<f64> {
        self.extent.size()
    }

    /// Requested sampling step along each axis.
    pub fn step(&self) -> Pair2D<f64> {
        self.extent.step()
    }
}

impl Arena for RectangularArena {
    fn discretisation(&self) -> Axes {
        self.extent.axes()
    }

    fn mask(&self) -> Option<Mask> {
        None
    }

    fn extent(&self) -> &Extent {
        &self.extent
    }

    fn contains(&self, position: &Position2D<f64>) -> bool {
        self.extent.contains(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use gridcells_core::Axis;
    use proptest::prelude::*;

    fn rect(sx: f64, sy: f64, qx: f64, qy: f64) -> RectangularArena {
        RectangularArena::new(Pair2D::new(sx, sy), Pair2D::new(qx, qy)).unwrap()
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_rejects_zero_width() {
        assert!(matches!(
            RectangularArena::new(Pair2D::new(0.0, 1.0), Pair2D::new(1.0, 1.0)),
            Err(ArenaError::NonPositive { parameter: "size.x", .. })
        ));
    }

    #[test]
    fn new_rejects_step_larger_than_size() {
        assert!(matches!(
            RectangularArena::new(Pair2D::new(1.0, 1.0), Pair2D::new(2.0, 1.0)),
            Err(ArenaError::StepExceedsSize { axis: Axis::X, .. })
        ));
    }

    #[test]
    fn new_rejects_nan_step() {
        assert!(matches!(
            RectangularArena::new(Pair2D::new(1.0, 1.0), Pair2D::new(0.5, f64::NAN)),
            Err(ArenaError::NonFinite { parameter: "step.y", .. })
        ));
    }

    // ── Query tests ─────────────────────────────────────────────

    #[test]
    fn mask_is_always_absent() {
        assert!(rect(4.0, 2.0, 1.0, 0.5).mask().is_none());
        assert!(rect(1.0, 1.0, 1.0, 1.0).mask().is_none());
    }

    #[test]
    fn per_axis_lengths_differ() {
        let axes = rect(6.0, 2.0, 1.0, 0.5).discretisation();
        assert_eq!(axes.x.len(), 7);
        assert_eq!(axes.y.len(), 5);
    }

    #[test]
    fn valid_cell_count_is_full_grid() {
        let a = rect(6.0, 2.0, 1.0, 0.5);
        assert_eq!(a.grid_shape(), (5, 7));
        assert_eq!(a.valid_cell_count(), 35);
    }

    #[test]
    fn contains_centered_box() {
        let a = rect(4.0, 2.0, 1.0, 1.0);
        assert!(a.contains(&Position2D::ORIGIN));
        assert!(a.contains(&Position2D::new(-2.0, 1.0)));
        assert!(!a.contains(&Position2D::new(0.0, 1.25)));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_uniform_step() {
        compliance::run_full_compliance(&rect(8.0, 4.0, 1.0, 1.0));
    }

    #[test]
    fn compliance_non_integral_step() {
        compliance::run_full_compliance(&rect(10.0, 7.0, 3.0, 0.3));
    }

    // ── Downcast test ───────────────────────────────────────────

    #[test]
    fn downcast_ref_rectangular() {
        let a: Box<dyn Arena> = Box::new(rect(2.0, 2.0, 1.0, 1.0));
        assert!(a.downcast_ref::<RectangularArena>().is_some());
        assert!(a.downcast_ref::<crate::CircularArena>().is_none());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn discretisation_matches_point_count_rule(
            sx in 0.5f64..50.0,
            sy in 0.5f64..50.0,
            rx in 0.02f64..1.0,
            ry in 0.02f64..1.0,
        ) {
            let (qx, qy) = (sx * rx, sy * ry);
            let a = rect(sx, sy, qx, qy);
            let axes = a.discretisation();
            prop_assert_eq!(axes.x.len(), (sx / qx).floor() as usize + 1);
            prop_assert_eq!(axes.y.len(), (sy / qy).floor() as usize + 1);
            prop_assert_eq!(axes.x[0], -sx / 2.0);
            prop_assert_eq!(axes.y[axes.y.len() - 1], sy / 2.0);
            prop_assert!(a.mask().is_none());
        }
    }
}
