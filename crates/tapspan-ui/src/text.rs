use tapspan_ui_graphics::{Rect, TextStyle};

use crate::annotated_string::{AnnotatedString, PlaceholderVerticalAlign, Run};
use crate::text_layout_result::{GlyphBox, LineLayout, PlaceholderRect, TextLayoutResult};

/// The layout engine seam.
///
/// Implementations shape and position the annotated text and must report
/// offsets in the annotated string's composed offset space, with each inline
/// placeholder occupying exactly one offset.
pub trait TextMeasurer {
    fn layout(&self, text: &AnnotatedString, style: &TextStyle) -> TextLayoutResult;
}

/// Fixed-advance measurer used for headless runs and tests.
///
/// Every character advances by `char_width`; placeholders advance by their
/// own width. Lines break on `\n` only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    char_width: f32,
    line_height: f32,
}

impl MonospacedTextMeasurer {
    pub const CHAR_WIDTH: f32 = 8.0;
    pub const LINE_HEIGHT: f32 = 20.0;

    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::new(Self::CHAR_WIDTH, Self::LINE_HEIGHT)
    }
}

/// Running state of a monospaced layout pass.
struct LineCursor {
    x: f32,
    y: f32,
    line: usize,
    line_start: usize,
    max_width: f32,
    lines: Vec<LineLayout>,
}

impl LineCursor {
    fn break_line(&mut self, end_offset: usize, next_start: usize, line_height: f32) {
        self.lines.push(LineLayout {
            start_offset: self.line_start,
            end_offset,
            y: self.y,
            height: line_height,
        });
        self.max_width = self.max_width.max(self.x);
        self.x = 0.0;
        self.y += line_height;
        self.line += 1;
        self.line_start = next_start;
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn layout(&self, text: &AnnotatedString, _style: &TextStyle) -> TextLayoutResult {
        let mut cursor = LineCursor {
            x: 0.0,
            y: 0.0,
            line: 0,
            line_start: 0,
            max_width: 0.0,
            lines: Vec::new(),
        };
        let mut glyphs = Vec::new();
        let mut placeholders = Vec::new();
        let mut base = 0;

        for run in text.runs() {
            match run {
                Run::Text { text, .. } => {
                    for (byte_index, ch) in text.char_indices() {
                        let offset = base + byte_index;
                        if ch == '\n' {
                            cursor.break_line(offset, offset + 1, self.line_height);
                            continue;
                        }
                        glyphs.push(GlyphBox {
                            offset,
                            line: cursor.line,
                            rect: Rect::new(cursor.x, cursor.y, self.char_width, self.line_height),
                        });
                        cursor.x += self.char_width;
                    }
                }
                Run::Placeholder { key, placeholder } => {
                    let width = placeholder.width.0;
                    let height = placeholder.height.0;
                    let top = match placeholder.vertical_align {
                        PlaceholderVerticalAlign::Top => cursor.y,
                        PlaceholderVerticalAlign::Center => {
                            cursor.y + (self.line_height - height) / 2.0
                        }
                        PlaceholderVerticalAlign::Bottom => cursor.y + self.line_height - height,
                    };
                    glyphs.push(GlyphBox {
                        offset: base,
                        line: cursor.line,
                        rect: Rect::new(cursor.x, cursor.y, width, self.line_height),
                    });
                    placeholders.push(PlaceholderRect {
                        key: *key,
                        offset: base,
                        rect: Rect::new(cursor.x, top, width, height),
                    });
                    cursor.x += width;
                }
            }
            base += run.offset_len();
        }
        cursor.break_line(base, base, self.line_height);

        let height = cursor.lines.len() as f32 * self.line_height;
        TextLayoutResult::new(
            cursor.max_width,
            height,
            glyphs,
            placeholders,
            cursor.lines,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotated_string::AnnotatedStringBuilder;

    #[test]
    fn measures_width_of_longest_line() {
        let mut builder = AnnotatedStringBuilder::new();
        builder.append("Hi\nWorld");
        let layout = MonospacedTextMeasurer::default()
            .layout(&builder.to_annotated_string(), &TextStyle::default());
        assert_eq!(layout.width, 5.0 * MonospacedTextMeasurer::CHAR_WIDTH);
        assert_eq!(layout.height, 2.0 * MonospacedTextMeasurer::LINE_HEIGHT);
    }

    #[test]
    fn empty_text_has_one_line() {
        let layout = MonospacedTextMeasurer::default()
            .layout(&AnnotatedString::default(), &TextStyle::default());
        assert_eq!(layout.line_count(), 1);
        assert!(layout.glyphs().is_empty());
    }
}
