use tracing::{debug, trace};

use crate::geometry::CellGeometry;
use crate::grid::CellIndex;
use crate::math::Point2;
use crate::pattern::{GestureState, PatternTracker};
use crate::segment::{segments, Segment};

/// A pointer or touch input event, in absolute client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Contact began.
    Down(Point2),
    /// Contact moved.
    Move(Point2),
    /// Contact ended.
    Up,
    /// The pointer left the interaction surface mid-gesture.
    Leave,
}

impl PointerEvent {
    /// Builds a `Down` event from a touch contact list, reading only the
    /// first contact. Returns `None` when no contact is active.
    #[must_use]
    pub fn touch_start(contacts: &[Point2]) -> Option<Self> {
        contacts.first().copied().map(Self::Down)
    }

    /// Builds a `Move` event from the first touch contact, ignoring any
    /// additional contacts.
    #[must_use]
    pub fn touch_move(contacts: &[Point2]) -> Option<Self> {
        contacts.first().copied().map(Self::Move)
    }

    /// Builds the event for the end of a touch interaction.
    #[must_use]
    pub fn touch_end() -> Self {
        Self::Up
    }
}

/// External validator for completed patterns.
///
/// Invoked at most once per finished gesture, and never with an empty
/// pattern. The outcome is opaque to the recognition engine; whether the
/// pattern matched a secret is the collaborator's business.
pub trait PatternSink {
    /// Receives a finished, non-empty pattern in visitation order.
    fn solve(&mut self, pattern: &[CellIndex]);
}

impl<F: FnMut(&[CellIndex])> PatternSink for F {
    fn solve(&mut self, pattern: &[CellIndex]) {
        self(pattern);
    }
}

/// Wires input events to the recognition state machine and owns the
/// per-gesture lifecycle.
///
/// The controller holds the single live [`GestureState`]; all event
/// handling is synchronous, so one event is fully processed before the
/// next arrives and no other gesture can be in flight.
#[derive(Debug)]
pub struct GestureController<G, S> {
    tracker: PatternTracker,
    geometry: G,
    sink: S,
    state: GestureState,
    solved: bool,
}

impl<G: CellGeometry, S: PatternSink> GestureController<G, S> {
    /// Creates a controller over the given geometry, forwarding finished
    /// patterns to `sink`.
    pub fn new(tracker: PatternTracker, geometry: G, sink: S) -> Self {
        Self {
            tracker,
            geometry,
            sink,
            state: GestureState::new(),
            solved: false,
        }
    }

    /// Routes one input event through the recognizer.
    ///
    /// Returns `true` when the event belonged to the drawing gesture; the
    /// embedder should then suppress the platform's default handling for
    /// it (scroll, text selection) so the gesture is not interrupted.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(client) => {
                let Some(point) = self.to_container(client) else {
                    return false;
                };
                debug!(x = point.x, y = point.y, "gesture started");
                self.tracker.start(&mut self.state, &self.geometry, point);
                true
            }
            PointerEvent::Move(client) => {
                if !self.state.is_dragging() {
                    return false;
                }
                let Some(point) = self.to_container(client) else {
                    return false;
                };
                trace!(x = point.x, y = point.y, "pointer moved");
                self.tracker.move_to(&mut self.state, &self.geometry, point);
                true
            }
            PointerEvent::Up | PointerEvent::Leave => self.finish(),
        }
    }

    /// Finalizes the in-flight gesture, if any. Leaving the surface and
    /// lifting the pointer are the same thing: the accumulated pattern is
    /// emitted, not discarded.
    fn finish(&mut self) -> bool {
        if !self.state.is_dragging() {
            return false;
        }
        if let Some(pattern) = self.tracker.end(&mut self.state) {
            if self.solved {
                debug!("pattern dropped, puzzle already solved");
            } else {
                debug!(pattern = ?pattern.as_slice(), "pattern emitted");
                self.sink.solve(pattern.as_slice());
            }
        }
        true
    }

    /// Translates absolute client coordinates into container-relative
    /// coordinates, or `None` while the container has no layout.
    fn to_container(&self, client: Point2) -> Option<Point2> {
        let origin = self.geometry.container_origin()?;
        Some(client - origin.coords)
    }

    /// Marks whether the external validator considers the puzzle solved.
    /// While solved, finished gestures are no longer forwarded to the sink.
    pub fn set_solved(&mut self, solved: bool) {
        self.solved = solved;
    }

    /// Returns whether the puzzle is marked solved.
    #[must_use]
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Returns the cells visited by the current (or last finished) gesture.
    #[must_use]
    pub fn pattern(&self) -> &[CellIndex] {
        self.state.pattern.as_slice()
    }

    /// Returns the last known pointer position, container-relative.
    #[must_use]
    pub fn cursor(&self) -> Point2 {
        self.state.cursor
    }

    /// Returns whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Derives the line segments to render for the current state, the live
    /// trailing segment included. Rebuilt on every call.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        segments(&self.state, &self.geometry)
    }

    /// Returns the geometry capability.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Returns the geometry capability mutably, for the layout collaborator
    /// to push fresh measurements through.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }
}
