//! Offset to line/column mapping for diagnostic display.

use serde::Serialize;

/// A 1-indexed line/column position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineCol {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

/// Precomputed line-start table for a source text.
///
/// Hosts build one per file to translate diagnostic spans into the
/// line/column positions a display layer needs. The engine itself only
/// deals in byte offsets.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Scans the text once and records every line start.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        Self { line_starts }
    }

    /// Maps a byte offset to its 1-indexed line and column.
    ///
    /// Offsets past the end of the text map to the last line.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        LineCol {
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        }
    }

    /// Number of lines in the indexed text.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
