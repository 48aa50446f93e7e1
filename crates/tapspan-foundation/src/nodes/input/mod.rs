pub mod gestures;
pub mod types;

pub use types::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::gestures::{PressGestureDetector, PressGuard, PressOutcome, PressState};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
}
