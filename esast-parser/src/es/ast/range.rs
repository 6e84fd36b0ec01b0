//! Position and range tracking for source locations
//!
//! All AST and parse-tree nodes carry a required [`Range`]: the byte span
//! of the producing production plus its start/end line:column positions.
//! Lines and columns are 0-based here; the tree dump renders lines 1-based.
//!
//! [`SourceLocation`] converts byte offsets to positions with a binary
//! search over line starts, so conversion is O(log n) and Unicode-safe
//! (columns are byte offsets within the line).

use std::fmt;
use std::ops::Range as ByteRange;

/// A line:column position in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// A source range: byte span plus start and end positions.
///
/// Invariant: `start <= end` in lexicographic (line, column) order. The
/// parser only ever builds ranges from ordered byte spans, which preserves
/// this by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Check whether a position falls within this range (inclusive ends).
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::new(0..0, Position::default(), Position::default())
    }
}

/// Fast conversion from byte offsets to line/column positions.
pub struct SourceLocation {
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset to a line/column position.
    pub fn position_at(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);
        Position::new(line, byte_offset - self.line_starts[line])
    }

    /// Convert a byte span to a full [`Range`].
    pub fn range_of(&self, span: &ByteRange<usize>) -> Range {
        Range::new(
            span.clone(),
            self.position_at(span.start),
            self.position_at(span.end),
        )
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering_is_lexicographic() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(1, 5), Position::new(1, 5));
    }

    #[test]
    fn test_position_at_multiline() {
        let loc = SourceLocation::new("var a;\nvar b;\na();");
        assert_eq!(loc.position_at(0), Position::new(0, 0));
        assert_eq!(loc.position_at(6), Position::new(0, 6));
        assert_eq!(loc.position_at(7), Position::new(1, 0));
        assert_eq!(loc.position_at(14), Position::new(2, 0));
        assert_eq!(loc.position_at(17), Position::new(2, 3));
    }

    #[test]
    fn test_position_at_unicode_source() {
        // Columns are byte offsets, so the multi-byte char advances by 2.
        let loc = SourceLocation::new("aö\nb");
        assert_eq!(loc.position_at(3), Position::new(0, 3));
        assert_eq!(loc.position_at(4), Position::new(1, 0));
    }

    #[test]
    fn test_range_of_spans_lines() {
        let loc = SourceLocation::new("a;\nb;");
        let range = loc.range_of(&(0..4));
        assert_eq!(range.start, Position::new(0, 0));
        assert_eq!(range.end, Position::new(1, 1));
        assert!(range.start <= range.end);
    }

    #[test]
    fn test_contains() {
        let range = Range::new(0..0, Position::new(1, 2), Position::new(3, 0));
        assert!(range.contains(Position::new(1, 2)));
        assert!(range.contains(Position::new(2, 40)));
        assert!(range.contains(Position::new(3, 0)));
        assert!(!range.contains(Position::new(1, 1)));
        assert!(!range.contains(Position::new(3, 1)));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(SourceLocation::new("x").line_count(), 1);
        assert_eq!(SourceLocation::new("x\ny\nz").line_count(), 3);
    }
}
