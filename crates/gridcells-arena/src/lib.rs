//! Arena shapes for gridcells.
//!
//! This crate defines the [`Arena`] trait, the contract through which
//! experiment code obtains a discretised coordinate grid over a recording
//! arena and a mask of the grid cells lying outside its true boundary,
//! along with the concrete arena shapes.
//!
//! # Shapes
//!
//! - [`RectangularArena`]: axis-aligned rectangle; never masked
//! - [`SquareArena`]: rectangle with equal sides
//! - [`CircularArena`]: circle over its square bounding grid; masked
//!
//! Every shape holds an immutable [`Extent`] and delegates discretisation
//! to it. Coordinates are centered at the origin.
//!
//! # Masks
//!
//! [`Arena::mask`] returns `None` when every cell is valid. A present
//! [`Mask`] marks *excluded* cells with `true`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod circular;
pub mod config;
pub mod error;
pub mod extent;
pub mod grid;
pub mod mask;
pub mod rectangular;
pub mod square;

#[cfg(test)]
pub(crate) mod compliance;

pub use arena::Arena;
pub use circular::CircularArena;
pub use config::{ArenaConfig, ArenaShape};
pub use error::ArenaError;
pub use extent::Extent;
pub use grid::Axes;
pub use mask::Mask;
pub use rectangular::RectangularArena;
pub use square::SquareArena;
