//! Press gesture recogniser.
//!
//! Tracks a single press from pointer down until it is released, cancelled or
//! abandoned. The window between down and release is owned by a
//! [`PressGuard`]: the shared [`PressState`] is cleared whenever the guard is
//! dropped, so a press can never outlive the interaction that started it.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tapspan_ui_graphics::Point;
use web_time::Instant;

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};

/// Offset currently under an active press, shared between the gesture
/// detector and whoever draws pressed feedback.
#[derive(Clone, Debug, Default)]
pub struct PressState {
    offset: Rc<Cell<Option<usize>>>,
}

impl PressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Character offset resolved at press-down, `None` when idle or when the
    /// press could not be resolved.
    pub fn pressed_offset(&self) -> Option<usize> {
        self.offset.get()
    }

    fn set(&self, offset: Option<usize>) {
        self.offset.set(offset);
    }

    fn reset(&self) {
        self.offset.set(None);
    }
}

/// Scoped ownership of one press window.
///
/// Dropping the guard resets the shared [`PressState`], whether the press
/// ended with a release, a cancellation, a panic in a click handler, or the
/// detector itself being dropped.
#[must_use = "dropping the guard ends the press immediately"]
#[derive(Debug)]
pub struct PressGuard {
    state: PressState,
    offset: Option<usize>,
    pointer: PointerId,
    pressed_at: Instant,
}

impl PressGuard {
    fn acquire(state: PressState, offset: Option<usize>, pointer: PointerId) -> Self {
        state.set(offset);
        Self {
            state,
            offset,
            pointer,
            pressed_at: Instant::now(),
        }
    }

    /// The offset stored when the press started.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Time since the pointer went down.
    pub fn held_for(&self) -> Duration {
        self.pressed_at.elapsed()
    }
}

impl Drop for PressGuard {
    fn drop(&mut self) {
        self.state.reset();
        log::trace!(
            "press on pointer {} ended after {:?}",
            self.pointer,
            self.pressed_at.elapsed()
        );
    }
}

/// What a pointer event did to the press state machine.
#[derive(Debug)]
pub enum PressOutcome {
    /// The event was not part of a press this detector tracks.
    Ignored,
    /// A press started at the given resolved offset.
    Pressed(Option<usize>),
    /// The press ended with a clean release. The guard keeps the press
    /// window open until the caller has finished resolving it.
    Released(PressGuard),
    /// The press was cancelled (cancel event, consumed by a parent, or
    /// travelled past the drag threshold).
    Cancelled(PressGuard),
}

#[derive(Debug)]
struct ActivePress {
    origin: Point,
    guard: PressGuard,
}

/// Idle/Pressed state machine driven by raw pointer events.
#[derive(Debug)]
pub struct PressGestureDetector {
    state: PressState,
    drag_threshold: f32,
    active: Option<ActivePress>,
}

impl PressGestureDetector {
    pub fn new(state: PressState) -> Self {
        Self {
            state,
            drag_threshold: DRAG_THRESHOLD,
            active: None,
        }
    }

    pub fn with_drag_threshold(mut self, drag_threshold: f32) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    pub fn state(&self) -> &PressState {
        &self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.active.is_some()
    }

    /// Feeds one pointer event through the state machine.
    ///
    /// `resolve_offset` maps the press position to a character offset and is
    /// only called for a down event that starts a press.
    pub fn on_event<F>(&mut self, event: &PointerEvent, resolve_offset: F) -> PressOutcome
    where
        F: FnOnce(Point) -> Option<usize>,
    {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() || self.active.is_some() {
                    return PressOutcome::Ignored;
                }
                let offset = resolve_offset(event.position);
                log::trace!(
                    "press down at ({}, {}) resolved to {:?}",
                    event.position.x,
                    event.position.y,
                    offset
                );
                let guard = PressGuard::acquire(self.state.clone(), offset, event.id);
                self.active = Some(ActivePress {
                    origin: event.position,
                    guard,
                });
                event.consume();
                PressOutcome::Pressed(offset)
            }
            PointerEventKind::Move => {
                let Some(active) = &self.active else {
                    return PressOutcome::Ignored;
                };
                if active.guard.pointer != event.id {
                    return PressOutcome::Ignored;
                }
                let slipped = active.origin.distance_to(event.position) > self.drag_threshold;
                if event.is_consumed() || slipped {
                    self.take(event.id)
                        .map_or(PressOutcome::Ignored, PressOutcome::Cancelled)
                } else {
                    PressOutcome::Ignored
                }
            }
            PointerEventKind::Up => match self.take(event.id) {
                Some(guard) if event.is_consumed() => PressOutcome::Cancelled(guard),
                Some(guard) => {
                    event.consume();
                    PressOutcome::Released(guard)
                }
                None => PressOutcome::Ignored,
            },
            PointerEventKind::Cancel => self
                .take(event.id)
                .map_or(PressOutcome::Ignored, PressOutcome::Cancelled),
        }
    }

    /// Abandons any press in progress.
    pub fn reset(&mut self) {
        self.active = None;
    }

    fn take(&mut self, pointer: PointerId) -> Option<PressGuard> {
        match &self.active {
            Some(active) if active.guard.pointer == pointer => {
                self.active.take().map(|active| active.guard)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "tests/press_tests.rs"]
mod tests;
