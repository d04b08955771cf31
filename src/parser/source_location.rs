//! Byte-offset to line:column conversion for error reporting

use std::fmt;

/// A 1-based line and column position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets to line:column positions via a line-start table
pub struct SourceLocation {
    line_starts: Vec<usize>,
}

impl SourceLocation {
    /// Build the line-start table for a source text.
    ///
    /// All three line-ending conventions are recognized; `\r\n` counts as a
    /// single line break.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        let bytes = source.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => line_starts.push(i + 1),
                b'\r' => {
                    if bytes.get(i + 1) == Some(&b'\n') {
                        i += 1;
                    }
                    line_starts.push(i + 1);
                }
                _ => {}
            }
            i += 1;
        }
        SourceLocation { line_starts }
    }

    /// Convert a byte offset to a 1-based position (binary search, O(log n))
    pub fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Position {
            line: line + 1,
            column: offset - self.line_starts[line] + 1,
        }
    }
}
