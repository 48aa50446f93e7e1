//! Pure math/data for drawing & text styling in Tapspan
//!
//! This crate contains the geometry primitives, colors, brushes, draw
//! primitives and text style types shared by the foundation and UI layers.
//! Nothing here knows about buttons or gestures.

mod brush;
mod color;
mod geometry;
mod typography;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{DrawPrimitive, DrawScope, Point, Rect, Size};
    pub use crate::typography::{SpanStyle, TextStyle};
    pub use crate::unit::Sp;
}
