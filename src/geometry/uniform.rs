use super::CellGeometry;
use crate::grid::{CellIndex, GridSpec};
use crate::math::Point2;

/// Computed cell geometry: cells sit in uniform square slots of `spacing`
/// pixels, centered within them.
///
/// Useful for headless embedders and tests, where no layout engine exists.
/// Centers are derived arithmetically and are always available for in-range
/// cells.
#[derive(Debug, Clone)]
pub struct UniformGeometry {
    grid: GridSpec,
    origin: Point2,
    spacing: f64,
}

impl UniformGeometry {
    /// Creates a uniform geometry with the given absolute container origin
    /// and slot spacing.
    #[must_use]
    pub fn new(grid: GridSpec, origin: Point2, spacing: f64) -> Self {
        Self {
            grid,
            origin,
            spacing,
        }
    }

    /// Returns the slot spacing.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }
}

impl CellGeometry for UniformGeometry {
    fn container_origin(&self) -> Option<Point2> {
        Some(self.origin)
    }

    #[allow(clippy::cast_precision_loss)]
    fn cell_center(&self, cell: CellIndex) -> Option<Point2> {
        let (row, col) = self.grid.row_col(cell)?;
        Some(Point2::new(
            (col as f64 + 0.5) * self.spacing,
            (row as f64 + 0.5) * self.spacing,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centers_on_slot_midpoints() {
        let geo = UniformGeometry::new(GridSpec::default(), Point2::origin(), 100.0);

        let first = geo.cell_center(0).unwrap();
        assert_relative_eq!(first.x, 50.0);
        assert_relative_eq!(first.y, 50.0);

        let last = geo.cell_center(8).unwrap();
        assert_relative_eq!(last.x, 250.0);
        assert_relative_eq!(last.y, 250.0);
    }

    #[test]
    fn out_of_range_cell_yields_none() {
        let geo = UniformGeometry::new(GridSpec::default(), Point2::origin(), 100.0);
        assert!(geo.cell_center(9).is_none());
    }

    #[test]
    fn origin_is_always_available() {
        let geo = UniformGeometry::new(GridSpec::default(), Point2::new(10.0, 20.0), 100.0);
        let origin = geo.container_origin().unwrap();
        assert_relative_eq!(origin.x, 10.0);
        assert_relative_eq!(origin.y, 20.0);
    }
}
