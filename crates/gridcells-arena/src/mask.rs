//! Validity masks over discretised arenas.

use ndarray::Array2;

/// Boolean grid marking which discretised points lie *outside* an arena.
///
/// The polarity is "points to exclude": `true` marks an invalid cell that
/// downstream consumers must drop, `false` a valid one. The shape is
/// `(rows, cols)` = `(len(y), len(x))` of the arena's discretisation, laid
/// out as [`meshgrid`](crate::grid::meshgrid) lays out coordinates.
///
/// Arenas whose every cell is valid return no mask at all (`None` from
/// [`Arena::mask`](crate::Arena::mask)) rather than an all-`false` one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    excluded: Array2<bool>,
}

impl Mask {
    /// Wrap an array where `true` marks excluded cells.
    pub fn from_excluded(excluded: Array2<bool>) -> Self {
        Self { excluded }
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.excluded.dim()
    }

    /// Number of rows (samples along y).
    pub fn rows(&self) -> usize {
        self.excluded.nrows()
    }

    /// Number of columns (samples along x).
    pub fn cols(&self) -> usize {
        self.excluded.ncols()
    }

    /// Whether the cell at `(row, col)` is excluded.
    ///
    /// Returns `None` if the index is outside the grid.
    pub fn is_excluded(&self, row: usize, col: usize) -> Option<bool> {
        self.excluded.get((row, col)).copied()
    }

    /// Number of excluded cells.
    pub fn excluded_count(&self) -> usize {
        self.excluded.iter().filter(|&&e| e).count()
    }

    /// Number of valid cells.
    pub fn valid_count(&self) -> usize {
        self.excluded.len() - self.excluded_count()
    }

    /// Fraction of cells that are valid.
    pub fn valid_ratio(&self) -> f64 {
        let total = self.excluded.len();
        if total == 0 {
            return 0.0;
        }
        self.valid_count() as f64 / total as f64
    }

    /// Indices `(row, col)` of the valid cells in row-major order.
    pub fn valid_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.excluded
            .indexed_iter()
            .filter(|(_, &e)| !e)
            .map(|(idx, _)| idx)
    }

    /// Borrow the underlying array (`true` = excluded).
    pub fn as_array(&self) -> &Array2<bool> {
        &self.excluded
    }

    /// Consume the mask, returning the underlying array.
    pub fn into_array(self) -> Array2<bool> {
        self.excluded
    }
}
