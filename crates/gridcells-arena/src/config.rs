//! Arena configuration.

use crate::arena::Arena;
use crate::circular::CircularArena;
use crate::error::ArenaError;
use crate::rectangular::RectangularArena;
use crate::square::SquareArena;
use gridcells_core::Pair2D;
use std::fmt;

/// Which arena shape to build, with its shape-specific dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArenaShape {
    /// Axis-aligned rectangle of the given width (x) and height (y).
    Rectangular {
        /// Extent along x.
        width: f64,
        /// Extent along y.
        height: f64,
    },
    /// Square with the given side length.
    Square {
        /// Extent along both axes.
        side: f64,
    },
    /// Circle with the given radius.
    Circular {
        /// Radius; the grid covers a square of side `2 * radius`.
        radius: f64,
    },
}

impl fmt::Display for ArenaShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangular { width, height } => write!(f, "rectangular {width}x{height}"),
            Self::Square { side } => write!(f, "square {side}"),
            Self::Circular { radius } => write!(f, "circular r={radius}"),
        }
    }
}

/// Configuration for building an arena.
///
/// Describes an arena without validating it; validation happens in
/// [`build`](ArenaConfig::build), which returns the same errors as the
/// shape constructors.
///
/// # Examples
///
/// ```
/// use gridcells_arena::{Arena, ArenaConfig, CircularArena};
/// use gridcells_core::Pair2D;
///
/// let arena = ArenaConfig::circular(2.0)
///     .with_step(Pair2D::new(0.5, 0.5))
///     .build()
///     .unwrap();
/// assert_eq!(arena.grid_shape(), (9, 9));
/// assert!(arena.downcast_ref::<CircularArena>().is_some());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArenaConfig {
    /// Shape and dimensions.
    pub shape: ArenaShape,
    /// Sampling step along each axis.
    ///
    /// Default: [`DEFAULT_STEP`](Self::DEFAULT_STEP) on both axes.
    pub step: Pair2D<f64>,
}

impl ArenaConfig {
    /// Default sampling step on each axis.
    pub const DEFAULT_STEP: f64 = 1.0;

    /// Create a config for `shape` with the default step.
    pub fn new(shape: ArenaShape) -> Self {
        Self {
            shape,
            step: Pair2D::splat(Self::DEFAULT_STEP),
        }
    }

    /// Rectangular arena of the given width and height.
    pub fn rectangular(width: f64, height: f64) -> Self {
        Self::new(ArenaShape::Rectangular { width, height })
    }

    /// Square arena of the given side length.
    pub fn square(side: f64) -> Self {
        Self::new(ArenaShape::Square { side })
    }

    /// Circular arena of the given radius.
    pub fn circular(radius: f64) -> Self {
        Self::new(ArenaShape::Circular { radius })
    }

    /// Replace the sampling step.
    pub fn with_step(self, step: Pair2D<f64>) -> Self {
        Self { step, ..self }
    }

    /// Validate the configuration and build the arena.
    pub fn build(&self) -> Result<Box<dyn Arena>, ArenaError> {
        let arena: Box<dyn Arena> = match self.shape {
            ArenaShape::Rectangular { width, height } => {
                Box::new(RectangularArena::new(Pair2D::new(width, height), self.step)?)
            }
            ArenaShape::Square { side } => Box::new(SquareArena::new(side, self.step)?),
            ArenaShape::Circular { radius } => Box::new(CircularArena::new(radius, self.step)?),
        };
        Ok(arena)
    }
}
