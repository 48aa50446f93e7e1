//! Segment builder: splits the full text into plain and button segments and
//! computes each button's click range in the composed offset space.
//!
//! Every decoration becomes one placeholder offset in the composed text, so
//! each button's click range is its source range shifted by the number of
//! decorations emitted before it. The range also covers the button's own
//! leading and trailing placeholders.

use std::rc::Rc;

use smallvec::SmallVec;
use tapspan_foundation::TextRange;
use tapspan_ui_graphics::{Sp, TextStyle};

use super::button::{Button, ButtonStatus, Decoration};
use super::decoration::{DecorationEntry, DecorationKey, DecorationRegistry};
use super::ClickableTextConfig;
use crate::annotated_string::{AnnotatedString, AnnotatedStringBuilder, Placeholder};

/// A contiguous run of either plain text or one button.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    Plain(String),
    Button(ButtonSegment),
}

impl Segment {
    /// Length in composed offsets, placeholders included.
    pub fn offset_len(&self) -> usize {
        match self {
            Segment::Plain(text) => text.len(),
            Segment::Button(button) => button.click_range.length(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonSegment {
    pub index: usize,
    pub text: String,
    /// Effective style, color alpha already applied.
    pub style: TextStyle,
    pub alpha: f32,
    pub leading: Option<DecorationKey>,
    pub trailing: Option<DecorationKey>,
    pub click_range: TextRange,
}

/// Output of one composition pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Composition {
    pub segments: Vec<Segment>,
    pub decorations: DecorationRegistry,
    /// Click range of button `i` at index `i`, sorted and non-overlapping.
    pub click_ranges: Vec<TextRange>,
    pub text: AnnotatedString,
}

impl Composition {
    /// The whole text as one non-interactive segment.
    pub fn plain(full_text: &str) -> Self {
        let mut acc = SegmentAccumulator::default();
        acc.push_plain(full_text);
        acc.finish()
    }
}

/// Rejected button lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonRangeError {
    OutOfBounds {
        index: usize,
        range: TextRange,
        text_len: usize,
    },
    Inverted {
        index: usize,
        range: TextRange,
    },
    /// The range starts before the previous button ends.
    Overlapping {
        index: usize,
        range: TextRange,
        previous_end: usize,
    },
    NotCharBoundary {
        index: usize,
        offset: usize,
    },
}

impl std::fmt::Display for ButtonRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ButtonRangeError::OutOfBounds {
                index,
                range,
                text_len,
            } => write!(
                f,
                "button {index} range {}..{} exceeds text length {text_len}",
                range.start, range.end
            ),
            ButtonRangeError::Inverted { index, range } => write!(
                f,
                "button {index} range {}..{} ends before it starts",
                range.start, range.end
            ),
            ButtonRangeError::Overlapping {
                index,
                range,
                previous_end,
            } => write!(
                f,
                "button {index} range {}..{} starts before the previous button ends at {previous_end}",
                range.start, range.end
            ),
            ButtonRangeError::NotCharBoundary { index, offset } => write!(
                f,
                "button {index} boundary {offset} is not on a char boundary"
            ),
        }
    }
}

impl std::error::Error for ButtonRangeError {}

/// Alpha for a button given its sampled status and press state.
pub fn alpha_for(status: ButtonStatus, pressed: bool, config: &ClickableTextConfig) -> f32 {
    match status {
        ButtonStatus::Disabled => config.disabled_alpha,
        ButtonStatus::Default if pressed => config.pressed_alpha,
        ButtonStatus::Default => 1.0,
    }
}

/// Fold state threaded through the button list.
#[derive(Default)]
struct SegmentAccumulator {
    /// Placeholders emitted so far.
    shift: usize,
    /// End of the previous button in the source text.
    cursor: usize,
    click_ranges: Vec<TextRange>,
    decorations: DecorationRegistry,
    segments: Vec<Segment>,
    text: AnnotatedStringBuilder,
}

impl SegmentAccumulator {
    fn push_plain(&mut self, slice: &str) {
        if slice.is_empty() {
            return;
        }
        self.text.append(slice);
        self.segments.push(Segment::Plain(slice.to_owned()));
    }

    fn finish(self) -> Composition {
        Composition {
            segments: self.segments,
            decorations: self.decorations,
            click_ranges: self.click_ranges,
            text: self.text.to_annotated_string(),
        }
    }
}

fn validate(
    index: usize,
    range: TextRange,
    full_text: &str,
    previous_end: usize,
) -> Result<(), ButtonRangeError> {
    if range.start > range.end {
        return Err(ButtonRangeError::Inverted { index, range });
    }
    if range.end > full_text.len() {
        return Err(ButtonRangeError::OutOfBounds {
            index,
            range,
            text_len: full_text.len(),
        });
    }
    if range.start < previous_end {
        return Err(ButtonRangeError::Overlapping {
            index,
            range,
            previous_end,
        });
    }
    for offset in [range.start, range.end] {
        if !full_text.is_char_boundary(offset) {
            return Err(ButtonRangeError::NotCharBoundary { index, offset });
        }
    }
    Ok(())
}

/// Composes `full_text` with `buttons` into segments, decorations and click
/// ranges.
///
/// Buttons must be ordered by start and must not overlap; touching ranges
/// are fine. `pressed_offset` only affects the alpha of the button it falls
/// in. The function is pure: identical inputs give identical output.
pub fn compose_segments(
    full_text: &str,
    default_style: &TextStyle,
    buttons: &[Button],
    pressed_offset: Option<usize>,
    config: &ClickableTextConfig,
) -> Result<Composition, ButtonRangeError> {
    let mut acc = buttons.iter().enumerate().try_fold(
        SegmentAccumulator::default(),
        |mut acc, (index, button)| -> Result<SegmentAccumulator, ButtonRangeError> {
            let range = button.range();
            validate(index, range, full_text, acc.cursor)?;

            let decor_count = button.decoration_count();
            // The first button sees shift == 0, so its start never moves.
            let click_range = range.shifted(acc.shift, acc.shift + decor_count);
            acc.click_ranges.push(click_range);
            acc.shift += decor_count;

            let status = button.status();
            let pressed = pressed_offset.is_some_and(|offset| click_range.contains(offset));
            let alpha = alpha_for(status, pressed, config);

            let style = default_style.merge(button.style());
            let placeholder = Placeholder::square(style.font_size.unwrap_or(FALLBACK_FONT_SIZE));
            let leading = button.leading().map(|_| DecorationKey::leading(range.start));
            let trailing = button.trailing().map(|_| DecorationKey::trailing(range.end));
            let keyed: SmallVec<[(DecorationKey, &Rc<dyn Decoration>); 2]> = leading
                .zip(button.leading())
                .into_iter()
                .chain(trailing.zip(button.trailing()))
                .collect();
            for (key, content) in keyed {
                acc.decorations.register(
                    key,
                    DecorationEntry {
                        content: Rc::clone(content),
                        placeholder,
                        alpha,
                    },
                );
            }

            let cursor = acc.cursor;
            acc.push_plain(&full_text[cursor..range.start]);

            let text = &full_text[range.as_range()];
            let style = style.with_color_alpha(alpha);
            if let Some(key) = leading {
                acc.text.append_inline_content(key, placeholder);
            }
            acc.text.with_style(style.to_span_style(), |b| b.append(text));
            if let Some(key) = trailing {
                acc.text.append_inline_content(key, placeholder);
            }
            acc.segments.push(Segment::Button(ButtonSegment {
                index,
                text: text.to_owned(),
                style,
                alpha,
                leading,
                trailing,
                click_range,
            }));

            acc.cursor = range.end;
            Ok(acc)
        },
    )?;

    let cursor = acc.cursor;
    acc.push_plain(&full_text[cursor..]);
    let composition = acc.finish();
    log::debug!(
        "composed {} buttons into {} segments, {} decorations",
        buttons.len(),
        composition.segments.len(),
        composition.decorations.len()
    );
    Ok(composition)
}

/// Font size used for decoration placeholders when neither the button nor
/// the default style sets one.
pub const FALLBACK_FONT_SIZE: Sp = Sp(14.0);

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
