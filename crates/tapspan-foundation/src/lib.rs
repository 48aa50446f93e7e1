//! Foundation elements for Tapspan: text ranges, pointer input and press gestures

pub mod gesture_constants;
pub mod nodes;
pub mod text;

pub use gesture_constants::DRAG_THRESHOLD;
pub use nodes::input::gestures::{PressGestureDetector, PressGuard, PressOutcome, PressState};
pub use nodes::input::{PointerEvent, PointerEventKind, PointerId};
pub use text::TextRange;

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::nodes::input::prelude::*;
    pub use crate::text::TextRange;
}
