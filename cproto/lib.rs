//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Library interface for posixutils-cproto
//
// Extracts the prototypes of externally visible function definitions from
// preprocessed C source. This is a delimiter-ordering scanner, not a C
// parser: it looks only at '(', ')', '{', '}', ';' and string quotes.
//

pub mod braces;
pub mod capture;
pub mod classify;
pub mod cpp;
pub mod error;
pub mod extract;
pub mod lines;
pub mod locate;
pub mod output;

pub use capture::Prototype;
pub use error::{Error, Result};
pub use extract::{extract, extract_str, ExtractOptions, Extraction};
pub use lines::SourceLines;
