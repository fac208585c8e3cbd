use crate::error::{GridlockError, Result};

/// Row-major index of a grid cell, in `0..n²` for an n×n grid.
pub type CellIndex = usize;

/// Visual radius of a drawn dot, in pixels.
///
/// Rendering reference only; hit-testing never reads it.
pub const DOT_RADIUS: f64 = 10.0;

/// Default activation radius for hit-testing, in pixels.
///
/// Intentionally larger than [`DOT_RADIUS`]: the touchable area around each
/// dot extends well past the drawn dot for usability.
pub const HIT_AREA_RADIUS: f64 = 30.0;

/// Dimensions of an n×n grid of hit targets.
///
/// Cells are addressed by row-major index; the grid holds no per-cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    size: usize,
}

impl Default for GridSpec {
    /// The 3×3 reference grid.
    fn default() -> Self {
        Self { size: 3 }
    }
}

impl GridSpec {
    /// Creates a grid of the given side length.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(GridlockError::InvalidGridSize(size));
        }
        Ok(Self { size })
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total number of cells (`size²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Returns whether `cell` addresses a cell of this grid.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        cell < self.cell_count()
    }

    /// Converts a cell index to its `(row, column)` position, or `None`
    /// if the index is out of range.
    #[must_use]
    pub fn row_col(&self, cell: CellIndex) -> Option<(usize, usize)> {
        if self.contains(cell) {
            Some((cell / self.size, cell % self.size))
        } else {
            None
        }
    }

    /// Converts a `(row, column)` position to its cell index, or `None`
    /// if the position is outside the grid.
    #[must_use]
    pub fn index(&self, row: usize, col: usize) -> Option<CellIndex> {
        if row < self.size && col < self.size {
            Some(row * self.size + col)
        } else {
            None
        }
    }

    /// Iterates over all cell indices in scan (row-major) order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        0..self.cell_count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_by_three() {
        let grid = GridSpec::default();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.cell_count(), 9);
    }

    #[test]
    fn zero_size_rejected() {
        assert!(GridSpec::new(0).is_err());
    }

    #[test]
    fn row_col_round_trip() {
        let grid = GridSpec::new(4).unwrap();
        for cell in grid.cells() {
            let (row, col) = grid.row_col(cell).unwrap();
            assert_eq!(grid.index(row, col), Some(cell));
        }
    }

    #[test]
    fn row_major_order() {
        let grid = GridSpec::default();
        assert_eq!(grid.row_col(0), Some((0, 0)));
        assert_eq!(grid.row_col(2), Some((0, 2)));
        assert_eq!(grid.row_col(3), Some((1, 0)));
        assert_eq!(grid.row_col(8), Some((2, 2)));
    }

    #[test]
    fn out_of_range_lookups() {
        let grid = GridSpec::default();
        assert!(!grid.contains(9));
        assert_eq!(grid.row_col(9), None);
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 3), None);
    }
}
