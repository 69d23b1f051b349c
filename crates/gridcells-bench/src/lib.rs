//! Benchmark profiles for gridcells arenas.
//!
//! Arena sizes used by the criterion benches, kept in the library so the
//! same profiles can be reused by ad-hoc timing code.

#![forbid(unsafe_code)]

use gridcells_arena::{ArenaConfig, ArenaError};
use gridcells_core::Pair2D;

/// Circular arena with a `cells x cells` bounding grid of unit step.
pub fn circular_profile(cells: usize) -> ArenaConfig {
    let radius = (cells.max(2) - 1) as f64 / 2.0;
    ArenaConfig::circular(radius).with_step(Pair2D::splat(1.0))
}

/// Square arena with a `cells x cells` grid of unit step.
pub fn square_profile(cells: usize) -> ArenaConfig {
    ArenaConfig::square((cells.max(2) - 1) as f64).with_step(Pair2D::splat(1.0))
}

/// Build every profile at the given grid size, failing on the first
/// invalid one.
pub fn validate_profiles(cells: usize) -> Result<(), ArenaError> {
    circular_profile(cells).build()?;
    square_profile(cells).build()?;
    Ok(())
}
