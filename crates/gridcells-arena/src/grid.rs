//! Coordinate axes and full 2D coordinate grids.

use gridcells_core::Pair2D;
use ndarray::{Array1, Array2};

/// Coordinate axes produced by discretising an arena: one ascending
/// sequence of values per dimension.
pub type Axes = Pair2D<Array1<f64>>;

/// Expand a pair of axes into full coordinate grids (`xy` indexing).
///
/// Both returned arrays have shape `(len(y), len(x))`; element `[i, j]`
/// of the `x` grid is `axes.x[j]` and of the `y` grid is `axes.y[i]`.
/// This is the grid layout every [`Mask`](crate::Mask) uses.
///
/// # Examples
///
/// ```
/// use gridcells_arena::grid::meshgrid;
/// use gridcells_core::Pair2D;
/// use ndarray::array;
///
/// let axes = Pair2D::new(array![-1.0, 0.0, 1.0], array![-0.5, 0.5]);
/// let grid = meshgrid(&axes);
/// assert_eq!(grid.x, array![[-1.0, 0.0, 1.0], [-1.0, 0.0, 1.0]]);
/// assert_eq!(grid.y, array![[-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]]);
/// ```
pub fn meshgrid(axes: &Axes) -> Pair2D<Array2<f64>> {
    let shape = (axes.y.len(), axes.x.len());
    Pair2D::new(
        Array2::from_shape_fn(shape, |(_, j)| axes.x[j]),
        Array2::from_shape_fn(shape, |(i, _)| axes.y[i]),
    )
}

/// Euclidean distance from the origin of every grid point, shape
/// `(len(y), len(x))`.
pub fn radial_distance(axes: &Axes) -> Array2<f64> {
    let grid = meshgrid(axes);
    ndarray::Zip::from(&grid.x)
        .and(&grid.y)
        .map_collect(|&x, &y| (x * x + y * y).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn meshgrid_shape_follows_y_then_x() {
        let axes = Pair2D::new(array![0.0, 1.0, 2.0, 3.0], array![0.0, 1.0]);
        let grid = meshgrid(&axes);
        assert_eq!(grid.x.dim(), (2, 4));
        assert_eq!(grid.y.dim(), (2, 4));
        assert_eq!(grid.x[[1, 3]], 3.0);
        assert_eq!(grid.y[[1, 3]], 1.0);
    }

    #[test]
    fn radial_distance_at_axis_points() {
        let axes = Pair2D::new(array![-2.0, 0.0, 2.0], array![-2.0, 0.0, 2.0]);
        let d = radial_distance(&axes);
        assert_eq!(d[[1, 1]], 0.0);
        assert_eq!(d[[1, 2]], 2.0);
        assert_eq!(d[[0, 1]], 2.0);
        assert_eq!(d[[2, 2]], 8f64.sqrt());
    }
}
