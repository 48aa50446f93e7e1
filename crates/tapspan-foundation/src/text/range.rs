//! Half-open text range used for button ranges and corrected click ranges.

/// A half-open `[start, end)` range of text offsets.
///
/// Button ranges index the source text in UTF-8 byte offsets (matching
/// Rust's `String`). Click ranges index the composed text, where every inline
/// placeholder occupies one extra offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if `index` lies in `[start, end)`.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Moves the start by `start_by` and the end by `end_by`.
    pub fn shifted(&self, start_by: usize, end_by: usize) -> Self {
        Self {
            start: self.start + start_by,
            end: self.end + end_by,
        }
    }

    pub fn as_range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let range = TextRange::new(2, 5);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn empty_range_contains_nothing() {
        let empty = TextRange::new(3, 3);
        assert!(!empty.contains(3));
        assert_eq!(empty.length(), 0);
    }

    #[test]
    fn inverted_range_has_no_length() {
        assert_eq!(TextRange::new(5, 2).length(), 0);
        assert!(!TextRange::new(5, 2).contains(3));
    }

    #[test]
    fn shifted_moves_each_end() {
        assert_eq!(TextRange::new(6, 9).shifted(1, 3), TextRange::new(7, 12));
    }

    #[test]
    fn from_std_range() {
        assert_eq!(TextRange::from(17..21), TextRange::new(17, 21));
    }
}
