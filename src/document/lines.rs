//! Line indexing for offset↔position translation

use crate::editing::{CharOffset, TextPosition};

/// Cumulative line lengths for a fixed text.
///
/// Every line length includes its terminating newline. The last line has
/// none, but it is counted as if it did so that its end is addressable.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Line lengths in chars, newline included
    lengths: Vec<usize>,
    /// Char offset where each line starts (prefix sums of `lengths`)
    char_starts: Vec<usize>,
    /// Byte offset where each line starts
    byte_starts: Vec<usize>,
    /// Total length of the text in chars
    len: usize,
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new("")
    }
}

impl LineIndex {
    /// Build the index for a text
    pub fn new(text: &str) -> Self {
        let mut lengths = Vec::new();
        let mut char_starts = Vec::new();
        let mut byte_starts = Vec::new();
        let mut chars = 0;
        let mut bytes = 0;

        for line in text.split('\n') {
            let line_chars = line.chars().count() + 1;
            char_starts.push(chars);
            byte_starts.push(bytes);
            lengths.push(line_chars);
            chars += line_chars;
            bytes += line.len() + 1;
        }

        Self {
            lengths,
            char_starts,
            byte_starts,
            // The last line's newline is virtual
            len: chars - 1,
        }
    }

    /// Number of lines (always at least one)
    pub fn line_count(&self) -> usize {
        self.lengths.len()
    }

    /// Length of the text in chars
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Line lengths in chars, newline included
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Char offset where a line starts
    pub fn line_start(&self, line: usize) -> Option<CharOffset> {
        self.char_starts.get(line).copied().map(CharOffset)
    }

    /// Byte offset where a line starts
    pub(crate) fn line_byte_start(&self, line: usize) -> usize {
        self.byte_starts[line.min(self.byte_starts.len() - 1)]
    }

    /// Convert a char offset to (line, column). Offsets past the end clamp
    /// to the end of the text.
    pub fn position_of(&self, offset: CharOffset) -> TextPosition {
        let offset = offset.0.min(self.len);
        // char_starts[0] == 0, so the partition point is at least 1
        let line = self.char_starts.partition_point(|&start| start <= offset) - 1;
        TextPosition {
            line,
            column: offset - self.char_starts[line],
        }
    }

    /// Convert (line, column) to a char offset. Columns past the end of the
    /// line clamp to the line end; lines past the last clamp to the text end.
    pub fn offset_of(&self, position: TextPosition) -> CharOffset {
        let Some(&start) = self.char_starts.get(position.line) else {
            return CharOffset(self.len);
        };
        let content_len = self.lengths[position.line] - 1;
        CharOffset(start + position.column.min(content_len))
    }
}
