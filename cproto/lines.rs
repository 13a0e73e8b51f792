//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Line storage for cproto
//
// Preprocessed input is loaded once and split into physical lines. Every
// scanner in the crate indexes into this read-only table.
//

use std::io::{self, Read};
use std::ops::Range;

// ============================================================================
// Position
// ============================================================================

/// A byte position inside the line table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line index (0-based)
    pub line: usize,
    /// Byte index within the line (0-based)
    pub byte: usize,
}

impl Position {
    pub fn new(line: usize, byte: usize) -> Self {
        Self { line, byte }
    }
}

// ============================================================================
// Source Lines
// ============================================================================

/// Immutable sequence of input lines, without line terminators.
///
/// Blank lines are kept so that line indices match the physical input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLines {
    lines: Vec<String>,
    /// Byte offset of each line from the start of input, plus one final
    /// entry for the end; each line counts one newline byte
    starts: Vec<usize>,
}

impl SourceLines {
    /// Split `text` into lines. Both `\n` and `\r\n` terminate a line; a final
    /// terminator does not produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(String::from).collect();

        let mut starts = Vec::with_capacity(lines.len() + 1);
        let mut offset = 0;
        starts.push(offset);
        for line in &lines {
            offset += line.len() + 1;
            starts.push(offset);
        }

        Self { lines, starts }
    }

    /// Read all of `reader` and split it into lines. Bytes that are not valid
    /// UTF-8 (string literals in legacy encodings) are replaced, not rejected.
    pub fn read_from<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(Self::from_text(&String::from_utf8_lossy(&buf)))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of line `idx`, or `None` past the end of input.
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Concatenate the lines in `range`, separated by `sep`.
    ///
    /// The range is clamped to the table, so an out-of-range end is not an error.
    pub fn join(&self, range: Range<usize>, sep: &str) -> String {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        self.lines[start..end].join(sep)
    }

    /// Number of bytes from the start of `base_line` to `pos`, counting one
    /// newline byte per line crossed.
    pub fn distance(&self, base_line: usize, pos: Position) -> usize {
        let end = pos.line.min(self.lines.len());
        let start = base_line.min(end);
        self.starts[end] - self.starts[start] + pos.byte
    }
}

impl Default for SourceLines {
    fn default() -> Self {
        Self::from_text("")
    }
}
