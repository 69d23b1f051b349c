//! gridcells: recording arenas, discretisation grids and validity masks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the gridcells sub-crates. For most users, adding `gridcells` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridcells::prelude::*;
//!
//! // A water maze of radius 2, sampled on a unit grid.
//! let arena = CircularArena::new(2.0, Pair2D::new(1.0, 1.0)).unwrap();
//!
//! let axes = arena.discretisation();
//! assert_eq!(axes.x.to_vec(), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
//!
//! // `true` marks grid cells outside the circle.
//! let mask = arena.mask().unwrap();
//! assert_eq!(mask.shape(), (axes.y.len(), axes.x.len()));
//! assert_eq!(mask.is_excluded(4, 4), Some(true));
//!
//! // Rectangular arenas have no mask: every cell is valid.
//! let box_arena = ArenaConfig::rectangular(4.0, 2.0).build().unwrap();
//! assert!(box_arena.mask().is_none());
//! assert!(box_arena.contains(&Position2D::new(2.0, -1.0)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridcells-core` | `Pair2D`, `Position2D`, `Axis` |
//! | [`arena`] | `gridcells-arena` | `Arena` trait, shapes, `Extent`, `Mask`, `ArenaConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core pair and position types (`gridcells-core`).
pub use gridcells_core as types;

/// Arena shapes, discretisation and masks (`gridcells-arena`).
pub use gridcells_arena as arena;

/// Commonly used types, re-exported for glob import.
///
/// ```rust
/// use gridcells::prelude::*;
/// ```
pub mod prelude {
    pub use gridcells_arena::{
        Arena, ArenaConfig, ArenaError, ArenaShape, Axes, CircularArena, Extent, Mask,
        RectangularArena, SquareArena,
    };
    pub use gridcells_core::{Axis, Pair2D, Position2D};
}
