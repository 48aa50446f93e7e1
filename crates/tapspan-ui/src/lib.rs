//! Clickable text spans for Tapspan
//!
//! Composes a block of text with clickable button ranges and inline
//! decorations, lays it out through a [`TextMeasurer`], and resolves pointer
//! presses back to the button that was tapped.

pub mod annotated_string;
pub mod clickable_text;
pub mod draw;
pub mod text;
pub mod text_layout_result;

pub use annotated_string::{
    AnnotatedString, AnnotatedStringBuilder, Placeholder, PlaceholderVerticalAlign, Run,
    PLACEHOLDER_CHAR, PLACEHOLDER_LEN,
};
pub use clickable_text::*;
pub use draw::draw_decorations;
pub use text::{MonospacedTextMeasurer, TextMeasurer};
pub use text_layout_result::{GlyphBox, LineLayout, PlaceholderRect, TextLayoutResult};

pub mod prelude {
    pub use crate::clickable_text::{
        Button, ButtonStatus, CancelPolicy, ClickableText, ClickableTextConfig, Composition,
        Decoration, SolidDecoration,
    };
    pub use crate::text::{MonospacedTextMeasurer, TextMeasurer};
    pub use crate::text_layout_result::TextLayoutResult;
}
