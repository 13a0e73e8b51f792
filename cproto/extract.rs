//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Prototype extraction driver
//
// classify -> capture/clean/filter -> skip the function body -> repeat.
// The cursor moves past at least one '{...}' body per signature, so the
// loop ends in time linear in the input.
//

use crate::braces::match_brace;
use crate::capture::Prototype;
use crate::classify::{CandidateSignature, Classification, Classifier};
use crate::error::{Error, Result};
use crate::lines::{Position, SourceLines};
use crate::locate::find_char_from;

// ============================================================================
// Options and Results
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Text placed, followed by a space, before each accepted prototype
    pub prefix: Option<String>,
}

/// Prototypes found in one input, in source order.
///
/// When `error` is set the parse stopped early and `prototypes` holds only
/// what was collected before the failure.
#[derive(Debug, Default)]
pub struct Extraction {
    prototypes: Vec<Prototype>,
    error: Option<Error>,
}

impl Extraction {
    pub fn prototypes(&self) -> &[Prototype] {
        &self.prototypes
    }

    pub fn into_prototypes(self) -> Vec<Prototype> {
        self.prototypes
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Extract the prototypes of all externally visible function definitions.
pub fn extract(lines: &SourceLines, options: &ExtractOptions) -> Extraction {
    let mut extraction = Extraction::default();

    if let Err(e) = run(lines, options, &mut extraction.prototypes) {
        log::warn!("parse stopped: {}", e);
        extraction.error = Some(e);
    }

    extraction
}

/// Like [`extract`], for input held in a string.
pub fn extract_str(text: &str, options: &ExtractOptions) -> Extraction {
    extract(&SourceLines::from_text(text), options)
}

fn run(lines: &SourceLines, options: &ExtractOptions, out: &mut Vec<Prototype>) -> Result<()> {
    let mut classifier = Classifier::new(lines);
    let mut cursor = 0;

    loop {
        let sig = match classifier.next_signature(cursor)? {
            Classification::Signature(sig) => sig,
            Classification::EndOfInput => return Ok(()),
        };

        if let Some(proto) = Prototype::from_signature(lines, &sig) {
            let proto = match &options.prefix {
                Some(prefix) => proto.with_prefix(prefix),
                None => proto,
            };
            log::debug!("line {}: accepted '{}'", sig.start_line + 1, proto);
            out.push(proto);
        }

        cursor = skip_body(lines, &sig)? + 1;
    }
}

/// Line of the `}` ending the body that follows `sig`.
fn skip_body(lines: &SourceLines, sig: &CandidateSignature) -> Result<usize> {
    let after_paren = Position::new(sig.stop_line, sig.close_paren + 1);
    let open = find_char_from(lines, sig.stop_line, after_paren, b'{')
        .ok_or(Error::MissingBody {
            line: sig.stop_line + 1,
        })?
        .position(sig.stop_line);

    let close = match_brace(lines, Position::new(open.line, open.byte + 1))
        .ok_or(Error::UnbalancedBraces {
            line: open.line + 1,
        })?;
    Ok(close.line)
}
