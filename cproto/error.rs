//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::process::ExitStatus;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Input ended inside a `{ ... }` region. Line is 1-based.
    #[error("unbalanced braces: block opened at line {line} is never closed")]
    UnbalancedBraces { line: usize },

    /// Line is 1-based and holds the signature's closing parenthesis.
    #[error("no function body follows the signature ending at line {line}")]
    MissingBody { line: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preprocessor '{command}' failed: {status}")]
    Preprocessor { command: String, status: ExitStatus },

    #[error("preprocessor command is empty")]
    EmptyPreprocessor,
}

impl Error {
    /// True for nesting failures, which end a parse but keep what was collected.
    pub fn is_incomplete_parse(&self) -> bool {
        matches!(
            self,
            Error::UnbalancedBraces { .. } | Error::MissingBody { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
