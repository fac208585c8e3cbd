use tracing::debug;

use crate::geometry::CellGeometry;
use crate::grid::{CellIndex, GridSpec};
use crate::hit::HitTester;
use crate::math::Point2;

/// Ordered sequence of visited cells, each appearing at most once.
///
/// Order is the order of first visitation; uniqueness holds by construction
/// because [`Pattern::push`] refuses duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<CellIndex>,
}

impl Pattern {
    /// Creates an empty pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all visited cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns the number of visited cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns whether no cell has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns whether the cell was already visited.
    #[must_use]
    pub fn contains(&self, cell: CellIndex) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns the most recently visited cell.
    #[must_use]
    pub fn last(&self) -> Option<CellIndex> {
        self.cells.last().copied()
    }

    /// Returns the visited cells in visitation order.
    #[must_use]
    pub fn as_slice(&self) -> &[CellIndex] {
        &self.cells
    }

    /// Iterates over the visited cells in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells.iter().copied()
    }

    /// Appends a cell unless it was already visited. Returns whether the
    /// cell was appended.
    pub fn push(&mut self, cell: CellIndex) -> bool {
        if self.cells.contains(&cell) {
            return false;
        }
        self.cells.push(cell);
        true
    }

    /// Consumes the pattern, returning the visited cells.
    #[must_use]
    pub fn into_vec(self) -> Vec<CellIndex> {
        self.cells
    }
}

/// Interaction phase of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress; the pattern may be empty to full.
    Dragging,
}

/// State of the single in-flight gesture.
///
/// Exactly one of these is live at a time; the controller owns it and only
/// touches it from the event-handling thread. The pattern survives gesture
/// end (the rendering layer keeps showing it) and is discarded when the
/// next gesture starts.
#[derive(Debug, Clone)]
pub struct GestureState {
    /// Whether a gesture is in progress.
    pub phase: GesturePhase,
    /// Cells visited so far.
    pub pattern: Pattern,
    /// Last known pointer position, container-relative.
    pub cursor: Point2,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            phase: GesturePhase::Idle,
            pattern: Pattern::new(),
            cursor: Point2::origin(),
        }
    }
}

impl GestureState {
    /// Creates an idle state with an empty pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }
}

/// The start/drag/end state machine that accumulates a pattern.
///
/// The tracker is a bundle of transition functions over a [`GestureState`];
/// it owns no gesture state of its own. All points are container-relative.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternTracker {
    grid: GridSpec,
    hit: HitTester,
}

impl PatternTracker {
    /// Creates a tracker for the given grid and hit tester.
    #[must_use]
    pub fn new(grid: GridSpec, hit: HitTester) -> Self {
        Self { grid, hit }
    }

    /// Returns the grid being tracked.
    #[must_use]
    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    /// Begins a new gesture at `point`.
    ///
    /// Any prior pattern is discarded, finished or not; there are no resume
    /// semantics. If `point` activates a cell, that cell becomes the
    /// pattern's first element.
    pub fn start(&self, state: &mut GestureState, geometry: &impl CellGeometry, point: Point2) {
        state.pattern.clear();
        state.phase = GesturePhase::Dragging;
        state.cursor = point;
        if let Some(cell) = self.hit.cell_at(point, &self.grid, geometry) {
            state.pattern.push(cell);
            debug!(cell, "gesture started on cell");
        }
    }

    /// Advances the gesture to `point`. Ignored while idle.
    ///
    /// A hit on an unvisited cell appends it; a revisit or a miss leaves
    /// the pattern unchanged (no backtracking, removal, or reordering).
    /// Successive hit tests are not interpolated, so a fast swipe can pass
    /// through a cell's hit area between two samples without committing it;
    /// this matches the observed interaction and is intended behavior.
    pub fn move_to(&self, state: &mut GestureState, geometry: &impl CellGeometry, point: Point2) {
        if !state.is_dragging() {
            return;
        }
        state.cursor = point;
        if let Some(cell) = self.hit.cell_at(point, &self.grid, geometry) {
            if state.pattern.push(cell) {
                debug!(cell, length = state.pattern.len(), "cell committed");
            }
        }
    }

    /// Ends the gesture, returning the accumulated pattern when non-empty.
    ///
    /// The pattern stays in `state` for rendering; the returned copy is for
    /// the caller to forward to a validator. An empty pattern yields `None`
    /// and must not be emitted.
    #[must_use]
    pub fn end(&self, state: &mut GestureState) -> Option<Pattern> {
        state.phase = GesturePhase::Idle;
        if state.pattern.is_empty() {
            None
        } else {
            Some(state.pattern.clone())
        }
    }
}
