mod measured;
mod uniform;

pub use measured::MeasuredGeometry;
pub use uniform::UniformGeometry;

use crate::grid::CellIndex;
use crate::math::Point2;

/// Capability interface over the layout engine.
///
/// Cell positions come from an external, mutable collaborator (a real layout
/// pass, a resize, a not-yet-mounted element), so every read returns an
/// `Option` and nothing may cache a center across reads. Callers treat
/// `None` as "skip this step"; it never fails a gesture.
pub trait CellGeometry {
    /// Returns the absolute top-left corner of the interaction surface, or
    /// `None` while the surface has no layout.
    fn container_origin(&self) -> Option<Point2>;

    /// Returns the pixel center of a cell relative to the container origin,
    /// or `None` when the cell's layout bounds are unavailable.
    fn cell_center(&self, cell: CellIndex) -> Option<Point2>;
}
