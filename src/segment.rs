use crate::geometry::CellGeometry;
use crate::math::Point2;
use crate::pattern::GestureState;

/// A directed visual edge between two points, container-relative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Starting point.
    pub start: Point2,
    /// Ending point.
    pub end: Point2,
}

/// Derives the line segments to render for the current gesture state.
///
/// Yields one segment per consecutive pair of visited cells, omitting (not
/// erroring on) any pair whose endpoint centers are currently unresolvable.
/// While a drag is in progress and at least one cell is committed, a
/// trailing live segment follows, from the last cell's center to the raw
/// cursor position (not snapped to a cell).
///
/// The iterator is lazy, finite, and holds no history; rebuild it whenever
/// the pattern or the cursor changes.
pub fn segments<'a, G: CellGeometry>(
    state: &'a GestureState,
    geometry: &'a G,
) -> impl Iterator<Item = Segment> + 'a {
    let committed = state.pattern.as_slice().windows(2).filter_map(move |pair| {
        let start = geometry.cell_center(pair[0])?;
        let end = geometry.cell_center(pair[1])?;
        Some(Segment { start, end })
    });

    let live = state
        .is_dragging()
        .then(|| state.pattern.last())
        .flatten()
        .and_then(move |cell| {
            let start = geometry.cell_center(cell)?;
            Some(Segment {
                start,
                end: state.cursor,
            })
        });

    committed.chain(live)
}
