use crate::error::{GridlockError, Result};
use crate::geometry::CellGeometry;
use crate::grid::{CellIndex, GridSpec, HIT_AREA_RADIUS};
use crate::math::Point2;

/// Finds which grid cell, if any, a pointer position activates.
#[derive(Debug, Clone, Copy)]
pub struct HitTester {
    radius: f64,
}

impl Default for HitTester {
    /// The reference activation radius, [`HIT_AREA_RADIUS`].
    fn default() -> Self {
        Self {
            radius: HIT_AREA_RADIUS,
        }
    }
}

impl HitTester {
    /// Creates a hit tester with the given activation radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite or not positive.
    pub fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GridlockError::InvalidRadius(radius));
        }
        Ok(Self { radius })
    }

    /// Returns the activation radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the first cell, in scan order, whose center lies strictly
    /// within the activation radius of `point` (container-relative).
    ///
    /// Cells without a resolvable center are skipped. A miss is the common
    /// case while the pointer travels between dots, not an error. If the
    /// radius exceeds half the grid spacing, several cells can match; the
    /// lowest index wins so the result stays deterministic.
    #[must_use]
    pub fn cell_at(
        &self,
        point: Point2,
        grid: &GridSpec,
        geometry: &impl CellGeometry,
    ) -> Option<CellIndex> {
        grid.cells().find(|&cell| {
            geometry
                .cell_center(cell)
                .is_some_and(|center| nalgebra::distance(&center, &point) < self.radius)
        })
    }
}
