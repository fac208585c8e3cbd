use super::CellGeometry;
use crate::grid::{CellIndex, GridSpec};
use crate::math::{Point2, Rect};

/// Cell geometry backed by externally measured bounding boxes.
///
/// The layout collaborator pushes absolute bounds for the container and for
/// each cell as they become known, and may replace or drop them at any time
/// between reads (resize, unmount). A cell's center is its measured top-left
/// relative to the container, offset by half the cell's dimensions.
#[derive(Debug, Clone)]
pub struct MeasuredGeometry {
    container: Option<Rect>,
    cells: Vec<Option<Rect>>,
}

impl MeasuredGeometry {
    /// Creates an empty geometry for the given grid; no bounds are known
    /// until the layout collaborator records them.
    #[must_use]
    pub fn new(grid: &GridSpec) -> Self {
        Self {
            container: None,
            cells: vec![None; grid.cell_count()],
        }
    }

    /// Records the container's absolute bounds.
    pub fn set_container(&mut self, bounds: Rect) {
        self.container = Some(bounds);
    }

    /// Records a cell's absolute bounds. Out-of-range indices are ignored.
    pub fn set_cell(&mut self, cell: CellIndex, bounds: Rect) {
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = Some(bounds);
        }
    }

    /// Forgets a cell's bounds, as after the element is unmounted.
    pub fn clear_cell(&mut self, cell: CellIndex) {
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = None;
        }
    }

    /// Forgets all recorded bounds.
    pub fn clear(&mut self) {
        self.container = None;
        for slot in &mut self.cells {
            *slot = None;
        }
    }
}

impl CellGeometry for MeasuredGeometry {
    fn container_origin(&self) -> Option<Point2> {
        self.container.map(|bounds| bounds.origin)
    }

    fn cell_center(&self, cell: CellIndex) -> Option<Point2> {
        let container = self.container?;
        let bounds = (*self.cells.get(cell)?)?;
        Some(Point2::new(
            bounds.origin.x - container.origin.x + bounds.width / 2.0,
            bounds.origin.y - container.origin.y + bounds.height / 2.0,
        ))
    }
}
