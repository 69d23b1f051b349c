//! Circular arenas.

use crate::arena::Arena;
use crate::error::{check_positive, ArenaError};
use crate::extent::Extent;
use crate::grid::{self, Axes};
use crate::mask::Mask;
use gridcells_core::{Pair2D, Position2D};
use log::{debug, trace};

/// A circular arena of radius `radius`, centered at the origin.
///
/// The discretisation covers the circle's square bounding box (side
/// `2 * radius`); the mask then carves the circle out of that grid by
/// excluding every point whose distance from the origin is strictly
/// greater than `radius`. Points exactly on the circle are valid.
///
/// # Examples
///
/// ```
/// use gridcells_arena::{Arena, CircularArena};
/// use gridcells_core::Pair2D;
///
/// let arena = CircularArena::new(2.0, Pair2D::new(1.0, 1.0)).unwrap();
/// let mask = arena.mask().unwrap();
/// assert_eq!(mask.shape(), (5, 5));
/// assert_eq!(mask.is_excluded(2, 2), Some(false)); // (0, 0)
/// assert_eq!(mask.is_excluded(2, 4), Some(false)); // (2, 0), on the circle
/// assert_eq!(mask.is_excluded(4, 4), Some(true)); // (2, 2)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CircularArena {
    radius: f64,
    extent: Extent,
}

impl CircularArena {
    /// Create a circular arena with the given radius and step.
    pub fn new(radius: f64, step: Pair2D<f64>) -> Result<Self, ArenaError> {
        check_positive("radius", radius)?;
        let extent = Extent::new(Pair2D::splat(radius * 2.0), step)?;
        debug!(
            "circular arena: radius {radius}, step {step}, grid {:?}",
            extent.grid_shape()
        );
        Ok(Self { radius, extent })
    }

    /// Radius of the circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Arena for CircularArena {
    fn discretisation(&self) -> Axes {
        self.extent.axes()
    }

    fn mask(&self) -> Option<Mask> {
        let axes = self.discretisation();
        let excluded = grid::radial_distance(&axes).mapv(|d| d > self.radius);
        let mask = Mask::from_excluded(excluded);
        trace!(
            "circular mask: {} of {} cells excluded",
            mask.excluded_count(),
            mask.rows() * mask.cols()
        );
        Some(mask)
    }

    fn extent(&self) -> &Extent {
        &self.extent
    }

    fn contains(&self, position: &Position2D<f64>) -> bool {
        position.norm() <= self.radius
    }
}
