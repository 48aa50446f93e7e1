pub mod press;

pub use press::{PressGestureDetector, PressGuard, PressOutcome, PressState};
