//! Typography data structures (text and span styles)

use crate::{Color, Sp};

/// Text style (data only, no rendering)
///
/// Unset fields inherit from whatever style the text is drawn on top of.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub font_size: Option<Sp>,
}

impl TextStyle {
    pub fn new(color: Color, font_size: Sp) -> Self {
        Self {
            color: Some(color),
            font_size: Some(font_size),
        }
    }

    /// Returns a copy of `self` where every field set on `other` wins.
    pub fn merge(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            color: other.color.or(self.color),
            font_size: other.font_size.or(self.font_size),
        }
    }

    /// Copies the style with its color alpha replaced; an unset color becomes
    /// black at that alpha.
    pub fn with_color_alpha(&self, alpha: f32) -> TextStyle {
        TextStyle {
            color: Some(self.color.unwrap_or(Color::BLACK).with_alpha(alpha)),
            font_size: self.font_size,
        }
    }

    pub fn to_span_style(&self) -> SpanStyle {
        SpanStyle {
            color: self.color,
            font_size: self.font_size,
        }
    }
}

/// The character-level subset of [`TextStyle`] that can be applied to a run
/// inside a larger paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpanStyle {
    pub color: Option<Color>,
    pub font_size: Option<Sp>,
}
