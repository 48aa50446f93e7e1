use std::cell::Cell;
use std::rc::Rc;
use tapspan_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking.
///
/// A parent that intercepts the gesture (a scroll container, for instance)
/// consumes the event; a press in progress treats a consumed move as a
/// cancellation.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position relative to the text's top-left corner.
    pub position: Point,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub fn moved(position: Point) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: Point) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn cancel(position: Point) -> Self {
        Self::new(PointerEventKind::Cancel, position)
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
