//! Square arenas.

use crate::arena::Arena;
use crate::error::{check_positive, ArenaError};
use crate::extent::Extent;
use crate::grid::Axes;
use crate::mask::Mask;
use gridcells_core::{Pair2D, Position2D};
use log::debug;

/// A square arena of side `side`, centered at the origin.
///
/// Behaves exactly like a [`RectangularArena`](crate::RectangularArena)
/// whose width and height are both `side`. The step may still differ per
/// axis, giving non-uniform spacing over a square extent.
///
/// # Examples
///
/// ```
/// use gridcells_arena::{Arena, SquareArena};
/// use gridcells_core::Pair2D;
///
/// let arena = SquareArena::new(4.0, Pair2D::new(1.0, 1.0)).unwrap();
/// let axes = arena.discretisation();
/// assert_eq!(axes.x.to_vec(), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
/// assert_eq!(axes.x, axes.y);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SquareArena {
    side: f64,
    extent: Extent,
}

impl SquareArena {
    /// Create a square arena with the given side length and step.
    pub fn new(side: f64, step: Pair2D<f64>) -> Result<Self, ArenaError> {
        check_positive("side", side)?;
        let extent = Extent::new(Pair2D::splat(side), step)?;
        debug!(
            "square arena: side {side}, step {step}, grid {:?}",
            extent.grid_shape()
        );
        Ok(Self { side, extent })
    }

    /// Side length.
    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Arena for SquareArena {
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
