//! Position tracking for symbols and diagnostics
//!
//! Stores the source location (line/column) of extracted symbols.

/// A span representing a range in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed, column counted in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Check if another span lies entirely inside this one
    pub fn contains_span(&self, other: &Span) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// The same span with 1-based lines and columns, as serialized.
    pub fn to_one_based(self) -> Span {
        Span {
            start: self.start.to_one_based(),
            end: self.end.to_one_based(),
        }
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn to_one_based(self) -> Position {
        Position::new(self.line + 1, self.column + 1)
    }
}
