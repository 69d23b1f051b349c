//! Arena trait compliance test helpers.
//!
//! These functions verify that an Arena implementation satisfies the
//! invariants required by the trait contract. Reused across all shape
//! test modules (Rectangular, Square, Circular).

use crate::arena::Arena;
use gridcells_core::{Axis, Position2D};

/// Assert that each axis starts at `-size/2`, ends at `+size/2` and is
/// strictly ascending.
pub fn assert_axes_centered_and_ascending(arena: &dyn Arena) {
    let axes = arena.discretisation();
    let half = arena.extent().half_size();
    for axis in Axis::ALL {
        let values = axes.get(axis);
        let h = *half.get(axis);
        assert_eq!(values[0], -h, "axis {axis} does not start at -{h}");
        assert_eq!(
            values[values.len() - 1],
            h,
            "axis {axis} does not end at +{h}"
        );
        for (i, w) in values.to_vec().windows(2).enumerate() {
            assert!(
                w[1] > w[0],
                "axis {axis} not ascending at index {i}: {} then {}",
                w[0],
                w[1]
            );
        }
    }
}

/// Assert that axis lengths follow `floor(size / step) + 1`.
pub fn assert_axis_lengths(arena: &dyn Arena) {
    let axes = arena.discretisation();
    let extent = arena.extent();
    for axis in Axis::ALL {
        let expected = (extent.size().get(axis) / extent.step().get(axis)).floor() as usize + 1;
        assert_eq!(
            axes.get(axis).len(),
            expected,
            "axis {axis} has {} points, expected {expected}",
            axes.get(axis).len()
        );
    }
    assert_eq!(arena.grid_shape(), (axes.y.len(), axes.x.len()));
}

/// Assert that two calls to `discretisation` return the same axes.
pub fn assert_discretisation_deterministic(arena: &dyn Arena) {
    assert_eq!(
        arena.discretisation(),
        arena.discretisation(),
        "discretisation is non-deterministic"
    );
}

/// Assert that two calls to `mask` return the same mask.
pub fn assert_mask_deterministic(arena: &dyn Arena) {
    assert_eq!(arena.mask(), arena.mask(), "mask is non-deterministic");
}

/// Assert that a present mask has shape `(len(y), len(x))`.
pub fn assert_mask_shape_matches_grid(arena: &dyn Arena) {
    if let Some(mask) = arena.mask() {
        let axes = arena.discretisation();
        assert_eq!(
            mask.shape(),
            (axes.y.len(), axes.x.len()),
            "mask shape does not match discretisation"
        );
    }
}

/// Assert that a grid cell is excluded iff its coordinates are not
/// contained in the arena.
pub fn assert_mask_agrees_with_contains(arena: &dyn Arena) {
    let axes = arena.discretisation();
    let mask = arena.mask();
    for (row, &y) in axes.y.iter().enumerate() {
        for (col, &x) in axes.x.iter().enumerate() {
            let excluded = mask
                .as_ref()
                .and_then(|m| m.is_excluded(row, col))
                .unwrap_or(false);
            let inside = arena.contains(&Position2D::new(x, y));
            assert_eq!(
                excluded, !inside,
                "cell ({row}, {col}) at ({x}, {y}): excluded = {excluded}, contains = {inside}"
            );
        }
    }
}

/// Assert that `valid_cell_count` matches the mask (or the full grid).
pub fn assert_valid_cell_count(arena: &dyn Arena) {
    let (rows, cols) = arena.grid_shape();
    let expected = match arena.mask() {
        Some(mask) => {
            assert_eq!(mask.valid_count() + mask.excluded_count(), rows * cols);
            mask.valid_count()
        }
        None => rows * cols,
    };
    assert_eq!(arena.valid_cell_count(), expected);
}

/// Run all compliance checks on an arena.
pub fn run_full_compliance(arena: &dyn Arena) {
    assert_axes_centered_and_ascending(arena);
    assert_axis_lengths(arena);
    assert_discretisation_deterministic(arena);
    assert_mask_deterministic(arena);
    assert_mask_shape_matches_grid(arena);
    assert_mask_agrees_with_contains(arena);
    assert_valid_cell_count(arena);
}
