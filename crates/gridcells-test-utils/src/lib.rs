//! Test fixtures for gridcells development.
//!
//! Provides a small catalogue of arenas with typical experimental
//! dimensions and deterministic walked-path samples for exercising
//! [`Arena::contains`] without a random number generator.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridcells_arena::{Arena, ArenaConfig, CircularArena, RectangularArena, SquareArena};
use gridcells_core::{Pair2D, Position2D};

/// 180 x 180 open field sampled every 2 units.
pub fn open_field() -> SquareArena {
    SquareArena::new(180.0, Pair2D::splat(2.0)).unwrap()
}

/// 100 x 50 rectangular box with a finer step along y.
pub fn linear_track_box() -> RectangularArena {
    RectangularArena::new(Pair2D::new(100.0, 50.0), Pair2D::new(2.0, 1.0)).unwrap()
}

/// Water-maze style circular arena, radius 90, sampled every 2 units.
pub fn water_maze() -> CircularArena {
    CircularArena::new(90.0, Pair2D::splat(2.0)).unwrap()
}

/// Radius-2 circle on a unit grid: the smallest arena with a non-trivial mask.
pub fn unit_circle_grid() -> CircularArena {
    CircularArena::new(2.0, Pair2D::splat(1.0)).unwrap()
}

/// Configs for one arena of every shape.
pub fn all_shape_configs() -> Vec<ArenaConfig> {
    vec![
        ArenaConfig::rectangular(6.0, 4.0).with_step(Pair2D::new(0.5, 1.0)),
        ArenaConfig::square(5.0).with_step(Pair2D::splat(0.25)),
        ArenaConfig::circular(3.0).with_step(Pair2D::new(0.3, 0.2)),
    ]
}

/// One built arena of every shape.
pub fn all_shapes() -> Vec<Box<dyn Arena>> {
    all_shape_configs()
        .iter()
        .map(|config| config.build().unwrap())
        .collect()
}

/// `n` deterministic positions on an outward spiral reaching `max_radius`.
///
/// Useful as a stand-in for a recorded trajectory: the samples cover all
/// directions and distances from the origin, so they cross the boundary of
/// any arena whose extent is below `max_radius`.
pub fn spiral_path(n: usize, max_radius: f64) -> Vec<Position2D<f64>> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n.max(1) as f64;
            let angle = t * 12.0 * std::f64::consts::PI;
            let r = t * max_radius;
            Position2D::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}
