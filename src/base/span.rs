//! Offset to line/column conversion.

pub use text_size::{TextRange, TextSize};

use super::position::{Position, Span};

/// A zero-based line and column, column counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl From<LineCol> for Position {
    fn from(lc: LineCol) -> Self {
        Position::new(lc.line as usize, lc.col as usize)
    }
}

/// Maps byte offsets of one text to line/column pairs.
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. Columns count
/// Unicode scalar values, so multi-byte characters advance the column by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first byte of every line.
    line_starts: Vec<TextSize>,
    /// Per line, the multi-byte characters as (byte column, utf8 length).
    wide_chars: Vec<Vec<(u32, u32)>>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        let mut wide_chars = vec![Vec::new()];
        let mut line_start = 0u32;

        let bytes = text.as_bytes();
        for (offset, ch) in text.char_indices() {
            let offset = offset as u32;
            let len = ch.len_utf8() as u32;
            match ch {
                '\n' => {
                    line_start = offset + 1;
                    line_starts.push(TextSize::new(line_start));
                    wide_chars.push(Vec::new());
                }
                '\r' if bytes.get(offset as usize + 1) != Some(&b'\n') => {
                    line_start = offset + 1;
                    line_starts.push(TextSize::new(line_start));
                    wide_chars.push(Vec::new());
                }
                _ if len > 1 => {
                    if let Some(line) = wide_chars.last_mut() {
                        line.push((offset - line_start, len));
                    }
                }
                _ => {}
            }
        }

        Self {
            line_starts,
            wide_chars,
            len: TextSize::of(text),
        }
    }

    /// Number of lines in the text (at least one).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Total length of the indexed text.
    pub fn len(&self) -> TextSize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == TextSize::new(0)
    }

    /// Convert a byte offset to a line/column. Offsets past the end clamp.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let byte_col = u32::from(offset - self.line_starts[line]);

        let mut col = byte_col;
        for &(wide_at, wide_len) in &self.wide_chars[line] {
            if wide_at >= byte_col {
                break;
            }
            col -= wide_len - 1;
        }

        LineCol {
            line: line as u32,
            col,
        }
    }

    /// Convert a line/column back to a byte offset, if it lies within the text.
    pub fn offset(&self, lc: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(lc.line as usize)?;
        let mut byte_col = lc.col;
        for &(wide_at, wide_len) in &self.wide_chars[lc.line as usize] {
            if wide_at >= byte_col {
                break;
            }
            byte_col += wide_len - 1;
        }
        let offset = start + TextSize::new(byte_col);
        (offset <= self.len).then_some(offset)
    }

    /// Convert a byte range into a 0-based span.
    pub fn span(&self, range: TextRange) -> Span {
        Span::new(
            self.line_col(range.start()).into(),
            self.line_col(range.end()).into(),
        )
    }
}
