//! Core types for gridcells arenas.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! small value types shared across the workspace: [`Pair2D`] for per-axis
//! quantities, [`Position2D`] for locations in the plane, and [`Axis`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod pair;
pub mod position;

pub use axis::Axis;
pub use pair::Pair2D;
pub use position::Position2D;
