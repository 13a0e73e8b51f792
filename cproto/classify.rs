//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Signature classification
//
// Decides, from the relative order of the first '(', its matching ')',
// the first '{' and the first ';', whether the text at a line starts a
// function definition, a braced block to skip, or a statement to skip.
//

use crate::braces::match_brace;
use crate::error::{Error, Result};
use crate::lines::{Position, SourceLines};
use crate::locate::{find_char, find_char_from, find_close_paren, Offset};

// ============================================================================
// Types
// ============================================================================

/// Line span of one function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateSignature {
    /// First line of the signature (after skipped markers and blanks)
    pub start_line: usize,
    /// Line holding the closing parenthesis of the parameter list
    pub stop_line: usize,
    /// Byte index of that closing parenthesis within `stop_line`
    pub close_paren: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Signature(CandidateSignature),
    EndOfInput,
}

// ============================================================================
// Search Cache
// ============================================================================

/// First occurrence of one delimiter at or after the line a search started on.
///
/// The first occurrence at or after a later line is the same one as long as
/// it does not lie before that line, so it is reused instead of rescanned.
struct NextDelimiter {
    target: u8,
    /// Line searched from, and what was found there
    found: Option<(usize, Option<Position>)>,
}

impl NextDelimiter {
    fn new(target: u8) -> Self {
        Self {
            target,
            found: None,
        }
    }

    fn find(&mut self, lines: &SourceLines, begin: usize) -> Option<Offset> {
        let pos = match self.found {
            Some((from, Some(pos))) if from <= begin && pos.line >= begin => Some(pos),
            Some((from, None)) if from <= begin => None,
            _ => {
                let pos = find_char(lines, begin, self.target).map(|off| off.position(begin));
                self.found = Some((begin, pos));
                pos
            }
        };
        pos.map(|pos| Offset::from_position(lines, begin, pos))
    }
}

// ============================================================================
// Classifier
// ============================================================================

pub struct Classifier<'a> {
    lines: &'a SourceLines,
    open: NextDelimiter,
    brace: NextDelimiter,
    semi: NextDelimiter,
    /// Last '(' matched and its ')'
    close: Option<(Position, Option<Position>)>,
}

impl<'a> Classifier<'a> {
    pub fn new(lines: &'a SourceLines) -> Self {
        Self {
            lines,
            open: NextDelimiter::new(b'('),
            brace: NextDelimiter::new(b'{'),
            semi: NextDelimiter::new(b';'),
            close: None,
        }
    }

    /// Find the next function signature at or after line `begin`.
    ///
    /// Blocks and statements met on the way are skipped. Running out of
    /// parentheses, closing parentheses or braces ends the search normally;
    /// an unclosed block that has to be skipped is an error.
    ///
    /// Searches are remembered between calls, so a sequence of calls with
    /// non-decreasing `begin` scans the input once.
    pub fn next_signature(&mut self, mut begin: usize) -> Result<Classification> {
        loop {
            begin = self.skip_noise(begin);

            let Some(open) = self.open.find(self.lines, begin) else {
                log::debug!("line {}: no further '(', end of input", begin + 1);
                return Ok(Classification::EndOfInput);
            };
            let close = self.close_paren(begin, open);
            let brace = self.brace.find(self.lines, begin);
            let semi = self.semi.find(self.lines, begin);

            let (Some(close), Some(brace)) = (close, brace) else {
                log::debug!(
                    "line {}: no matching ')' or no '{{' left, end of input",
                    begin + 1
                );
                return Ok(Classification::EndOfInput);
            };

            if brace.total < open.total {
                log::debug!("line {}: braced block before '(', skipping", begin + 1);
                begin = self.skip_block(begin, brace)?;
                continue;
            }

            if let Some(semi) = semi {
                if semi.total < brace.total || semi.total < open.total {
                    log::debug!("line {}: statement, skipping", begin + 1);
                    begin += semi.line_delta + 1;
                    continue;
                }
            }

            let stop = close.position(begin);
            log::debug!(
                "lines {}-{}: function signature",
                begin + 1,
                stop.line + 1
            );
            return Ok(Classification::Signature(CandidateSignature {
                start_line: begin,
                stop_line: stop.line,
                close_paren: stop.byte,
            }));
        }
    }

    /// The ')' matching `open`, reusing the last match when `open` is unchanged.
    fn close_paren(&mut self, begin: usize, open: Offset) -> Option<Offset> {
        let open_pos = open.position(begin);
        let close = match self.close {
            Some((cached_open, close)) if cached_open == open_pos => close,
            _ => {
                let close =
                    find_close_paren(self.lines, begin, open).map(|off| off.position(begin));
                self.close = Some((open_pos, close));
                close
            }
        };
        close.map(|pos| Offset::from_position(self.lines, begin, pos))
    }

    /// Advance past line markers, blank lines and `//` lines, repeating until
    /// none of the three applies.
    fn skip_noise(&self, mut pos: usize) -> usize {
        loop {
            let before = pos;
            pos = self.skip_while(pos, |l| l.starts_with('#'));
            pos = self.skip_while(pos, |l| l.trim().is_empty());
            pos = self.skip_while(pos, |l| l.starts_with("//"));
            if pos == before {
                return pos;
            }
            log::trace!("skipped lines {}..{}", before + 1, pos + 1);
        }
    }

    fn skip_while<F: Fn(&str) -> bool>(&self, mut pos: usize, skip: F) -> usize {
        while self.lines.line(pos).is_some_and(&skip) {
            pos += 1;
        }
        pos
    }

    /// Skip the block opened by `brace` and the statement it ends, returning
    /// the line after the terminating `;`.
    fn skip_block(&self, begin: usize, brace: Offset) -> Result<usize> {
        let open = brace.position(begin);
        let close = match_brace(self.lines, Position::new(open.line, open.byte + 1))
            .ok_or(Error::UnbalancedBraces {
                line: open.line + 1,
            })?;

        let after_close = Position::new(close.line, close.byte + 1);
        let next = match find_char_from(self.lines, close.line, after_close, b';') {
            Some(semi) => close.line + semi.line_delta + 1,
            None => close.line + 1,
        };
        Ok(next)
    }
}
