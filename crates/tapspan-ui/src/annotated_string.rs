//! Styled text with inline placeholders.
//!
//! An [`AnnotatedString`] is a sequence of runs: styled text and inline
//! placeholders reserved for decoration content. Its offset space counts text
//! runs by UTF-8 byte length and every placeholder as exactly
//! [`PLACEHOLDER_LEN`] offset. Layout engines report positions in this space.

use tapspan_ui_graphics::{SpanStyle, Sp};

use crate::clickable_text::DecorationKey;

/// Offset width of a single inline placeholder.
pub const PLACEHOLDER_LEN: usize = 1;

/// Character used when an annotated string is flattened for display.
pub const PLACEHOLDER_CHAR: char = '\u{FFFD}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderVerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Space reserved in the text flow for inline content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placeholder {
    pub width: Sp,
    pub height: Sp,
    pub vertical_align: PlaceholderVerticalAlign,
}

impl Placeholder {
    /// A square placeholder as tall as the surrounding text, vertically centered.
    pub fn square(size: Sp) -> Self {
        Self {
            width: size,
            height: size,
            vertical_align: PlaceholderVerticalAlign::Center,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Run {
    Text {
        text: String,
        style: Option<SpanStyle>,
    },
    Placeholder {
        key: DecorationKey,
        placeholder: Placeholder,
    },
}

impl Run {
    pub fn offset_len(&self) -> usize {
        match self {
            Run::Text { text, .. } => text.len(),
            Run::Placeholder { .. } => PLACEHOLDER_LEN,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotatedString {
    runs: Vec<Run>,
}

impl AnnotatedString {
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Length in composed offsets.
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::offset_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn placeholder_count(&self) -> usize {
        self.runs
            .iter()
            .filter(|run| matches!(run, Run::Placeholder { .. }))
            .count()
    }

    /// Flattened text with each placeholder replaced by [`PLACEHOLDER_CHAR`].
    ///
    /// The result's byte offsets do not match the composed offset space;
    /// use it for display and logging only.
    pub fn display_text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            match run {
                Run::Text { text, .. } => out.push_str(text),
                Run::Placeholder { .. } => out.push(PLACEHOLDER_CHAR),
            }
        }
        out
    }
}

/// Incremental builder for [`AnnotatedString`].
#[derive(Debug, Default)]
pub struct AnnotatedStringBuilder {
    runs: Vec<Run>,
    style_stack: Vec<SpanStyle>,
}

impl AnnotatedStringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text using the innermost active style, if any.
    pub fn append(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let style = self.style_stack.last().copied();
        if let Some(Run::Text {
            text: last,
            style: last_style,
        }) = self.runs.last_mut()
        {
            if *last_style == style {
                last.push_str(text);
                return;
            }
        }
        self.runs.push(Run::Text {
            text: text.to_owned(),
            style,
        });
    }

    /// Runs `block` with `style` active for everything it appends.
    pub fn with_style<R>(&mut self, style: SpanStyle, block: impl FnOnce(&mut Self) -> R) -> R {
        self.style_stack.push(style);
        let result = block(self);
        self.style_stack.pop();
        result
    }

    pub fn append_inline_content(&mut self, key: DecorationKey, placeholder: Placeholder) {
        self.runs.push(Run::Placeholder { key, placeholder });
    }

    /// Current length in composed offsets.
    pub fn len(&self) -> usize {
        self.runs.iter().map(Run::offset_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn to_annotated_string(self) -> AnnotatedString {
        AnnotatedString { runs: self.runs }
    }
}
