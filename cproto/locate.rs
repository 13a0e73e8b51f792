//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Delimiter search across line boundaries
//
// These searches know nothing about string or character literals. Callers
// only rely on them where a delimiter inside a literal cannot change the
// outcome of classification.
//

use crate::lines::{Position, SourceLines};

// ============================================================================
// Offset
// ============================================================================

/// Location of a character found by a forward search.
///
/// All three fields are relative to the base line the search was rooted at,
/// so `total` values from searches sharing a base line can be ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Lines past the base line
    pub line_delta: usize,
    /// Byte index within the line holding the character
    pub byte: usize,
    /// Bytes from the start of the base line, one per newline crossed
    pub total: usize,
}

impl Offset {
    /// Offset of the absolute position `pos` from `base_line`, which must not
    /// come after `pos.line`.
    pub fn from_position(lines: &SourceLines, base_line: usize, pos: Position) -> Self {
        Self {
            line_delta: pos.line - base_line,
            byte: pos.byte,
            total: lines.distance(base_line, pos),
        }
    }

    /// Absolute position of this offset, given the base line of its search.
    pub fn position(&self, base_line: usize) -> Position {
        Position::new(base_line + self.line_delta, self.byte)
    }
}

// ============================================================================
// Scanner
// ============================================================================

/// Byte-wise forward iterator over the line table.
///
/// Yields every byte from a starting position to end of input, paired with
/// its [`Offset`] from the base line. Line terminators are not yielded.
pub struct Scanner<'a> {
    lines: &'a SourceLines,
    base_line: usize,
    line: usize,
    byte: usize,
    total: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(lines: &'a SourceLines, base_line: usize, from: Position) -> Self {
        let byte = lines.line(from.line).map_or(0, |text| from.byte.min(text.len()));
        let from = Position::new(from.line, byte);
        Self {
            lines,
            base_line,
            line: from.line,
            byte: from.byte,
            total: lines.distance(base_line, from),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = (Offset, u8);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.line(self.line)?.as_bytes();
            if self.byte < text.len() {
                let offset = Offset {
                    line_delta: self.line - self.base_line,
                    byte: self.byte,
                    total: self.total,
                };
                let ch = text[self.byte];
                self.byte += 1;
                self.total += 1;
                return Some((offset, ch));
            }

            // newline
            self.total += 1;
            self.line += 1;
            self.byte = 0;
        }
    }
}

// ============================================================================
// Searches
// ============================================================================

/// Find the first `target` at or after byte 0 of `start_line`.
pub fn find_char(lines: &SourceLines, start_line: usize, target: u8) -> Option<Offset> {
    find_char_from(lines, start_line, Position::new(start_line, 0), target)
}

/// Find the first `target` at or after `from`, with offsets measured from
/// `base_line`.
pub fn find_char_from(
    lines: &SourceLines,
    base_line: usize,
    from: Position,
    target: u8,
) -> Option<Offset> {
    Scanner::new(lines, base_line, from)
        .find(|&(_, ch)| ch == target)
        .map(|(offset, _)| offset)
}

/// Find the `)` matching the `(` at `open`, counting parenthesis depth only.
///
/// `open` must come from a search rooted at `base_line`; the result shares
/// that base. Parentheses inside literals are counted like any other.
pub fn find_close_paren(lines: &SourceLines, base_line: usize, open: Offset) -> Option<Offset> {
    let from = Position::new(base_line + open.line_delta, open.byte + 1);
    let mut depth: usize = 1;

    for (offset, ch) in Scanner::new(lines, base_line, from) {
        match ch {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }

    None
}
