//! The core `Arena` trait and `dyn Arena` downcast support.

use crate::extent::Extent;
use crate::grid::Axes;
use crate::mask::Mask;
use gridcells_core::Position2D;
use std::any::Any;
use std::fmt;

/// A bounded 2D region in which a subject's position is recorded.
///
/// Every shape exposes a discretisation of its extent into coordinate axes
/// and an optional validity mask over the resulting grid. Concrete shapes
/// ([`RectangularArena`](crate::RectangularArena),
/// [`SquareArena`](crate::SquareArena),
/// [`CircularArena`](crate::CircularArena)) hold an immutable [`Extent`]
/// and delegate discretisation to it.
///
/// `discretisation` and `mask` have no default bodies, so a shape that
/// forgets either does not compile.
///
/// # Thread Safety
///
/// Arenas are immutable after construction and every query is a pure
/// function of that state, so `Send + Sync` holds for all shapes.
pub trait Arena: Any + Send + Sync + fmt::Debug + 'static {
    /// Coordinate axes spanning the arena at the configured step.
    ///
    /// Deterministic: two calls on the same arena return identical axes.
    fn discretisation(&self) -> Axes;

    /// Cells of the discretised grid that lie outside the arena.
    ///
    /// `None` means no cell is excluded. Otherwise the mask has shape
    /// `(len(y), len(x))` and `true` marks an excluded (invalid) cell.
    fn mask(&self) -> Option<Mask>;

    /// The extent this arena discretises.
    fn extent(&self) -> &Extent;

    /// Whether `position` lies inside the arena's true boundary.
    ///
    /// Boundary points are inside.
    fn contains(&self, position: &Position2D<f64>) -> bool;

    /// Shape of the discretised grid as `(rows, cols)` = `(len(y), len(x))`.
    fn grid_shape(&self) -> (usize, usize) {
        self.extent().grid_shape()
    }

    /// Number of grid cells that are not masked out.
    fn valid_cell_count(&self) -> usize {
        match self.mask() {
            Some(mask) => mask.valid_count(),
            None => {
                let (rows, cols) = self.grid_shape();
                rows * cols
            }
        }
    }
}

impl dyn Arena {
    /// Attempt to downcast a trait object to a concrete arena type.
    ///
    /// Code holding a `&dyn Arena` can use this to reach shape-specific
    /// accessors such as [`CircularArena::radius`](crate::CircularArena::radius).
    pub fn downcast_ref<T: Arena>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
