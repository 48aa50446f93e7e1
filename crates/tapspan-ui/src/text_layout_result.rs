//! Text layout result with cached glyph boxes.
//!
//! A `TextLayoutResult` is produced once per layout pass and answers the two
//! questions the clickable text needs afterwards: which composed offset sits
//! under a pixel position, and where each inline placeholder was placed.

use tapspan_ui_graphics::{Point, Rect};

use crate::clickable_text::DecorationKey;

/// Layout information for a single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// Composed offset where the line starts
    pub start_offset: usize,
    /// Composed offset where the line ends (exclusive, before \n or at text end)
    pub end_offset: usize,
    /// Y position of line top
    pub y: f32,
    /// Height of line
    pub height: f32,
}

/// Hit box of one character or placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    /// Composed offset of the glyph's first unit
    pub offset: usize,
    /// Index into [`TextLayoutResult::lines`]
    pub line: usize,
    pub rect: Rect,
}

/// Where an inline placeholder ended up after layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderRect {
    pub key: DecorationKey,
    pub offset: usize,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLayoutResult {
    /// Total width of laid out text
    pub width: f32,
    /// Total height of laid out text
    pub height: f32,
    /// Glyph boxes in offset order
    glyphs: Vec<GlyphBox>,
    /// Placeholder rects in emission order
    placeholders: Vec<PlaceholderRect>,
    pub lines: Vec<LineLayout>,
}

impl TextLayoutResult {
    pub fn new(
        width: f32,
        height: f32,
        glyphs: Vec<GlyphBox>,
        placeholders: Vec<PlaceholderRect>,
        lines: Vec<LineLayout>,
    ) -> Self {
        Self {
            width,
            height,
            glyphs,
            placeholders,
            lines,
        }
    }

    /// Returns the composed offset of the glyph under `position`.
    ///
    /// Positions outside every line, or past the last glyph of the line they
    /// fall on, resolve to `None`.
    pub fn get_offset_for_position(&self, position: Point) -> Option<usize> {
        let line_index = self
            .lines
            .iter()
            .position(|line| position.y >= line.y && position.y < line.y + line.height)?;

        let first = self.glyphs.partition_point(|glyph| glyph.line < line_index);
        let line_glyphs = self.glyphs[first..]
            .iter()
            .take_while(|glyph| glyph.line == line_index);

        line_glyphs
            .filter(|glyph| {
                position.x >= glyph.rect.x && position.x < glyph.rect.x + glyph.rect.width
            })
            .map(|glyph| glyph.offset)
            .next()
    }

    /// Returns the hit box of the glyph starting at `offset`.
    pub fn rect_for_offset(&self, offset: usize) -> Option<Rect> {
        self.glyphs
            .binary_search_by_key(&offset, |glyph| glyph.offset)
            .ok()
            .map(|index| self.glyphs[index].rect)
    }

    pub fn glyphs(&self) -> &[GlyphBox] {
        &self.glyphs
    }

    pub fn placeholder_rects(&self) -> &[PlaceholderRect] {
        &self.placeholders
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
