//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Brace matching with string-literal awareness
//

use crate::lines::{Position, SourceLines};
use crate::locate::Scanner;

/// Find the `}` that closes a `{` already seen just before `after_open`.
///
/// Depth starts at 1 for the known opening brace. A `"` toggles string state
/// unless the byte before it on the same line is a backslash; the first byte
/// of the scan and the first byte of each line have no look-behind, so a `"`
/// there always toggles. Braces inside strings are ignored. A brace directly
/// followed by `'` is taken to be a character literal such as `'}'`.
///
/// Known limitations: an escaped backslash before a closing quote (`"\\"`),
/// strings continued across lines, and the character literal `'"'` all
/// confuse the string state.
///
/// Returns `None` when input ends before depth returns to zero.
pub fn match_brace(lines: &SourceLines, after_open: Position) -> Option<Position> {
    let base_line = after_open.line;
    let mut depth: usize = 1;
    let mut in_string = false;
    let mut prev: Option<u8> = None;

    for (offset, ch) in Scanner::new(lines, base_line, after_open) {
        let pos = offset.position(base_line);
        if pos.byte == 0 {
            prev = None;
        }

        match ch {
            b'"' if prev != Some(b'\\') => in_string = !in_string,
            b'{' | b'}' if !in_string && !char_literal_follows(lines, pos) => {
                if ch == b'{' {
                    depth += 1;
                } else {
                    depth -= 1;
                    if depth == 0 {
                        return Some(pos);
                    }
                }
            }
            _ => {}
        }

        prev = Some(ch);
    }

    None
}

fn char_literal_follows(lines: &SourceLines, pos: Position) -> bool {
    lines
        .line(pos.line)
        .and_then(|text| text.as_bytes().get(pos.byte + 1))
        == Some(&b'\'')
}
