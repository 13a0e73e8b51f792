//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// External C preprocessor invocation
//

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::lines::SourceLines;

/// Preprocessor used when `CPP` is not set.
pub const DEFAULT_CPP: &str = "cc -E";

#[derive(Debug, Clone)]
pub struct CppConfig {
    /// Program and leading arguments, split on whitespace
    pub command: String,
    pub defines: Vec<String>,
    pub undefines: Vec<String>,
    pub include_paths: Vec<String>,
}

impl Default for CppConfig {
    fn default() -> Self {
        Self {
            command: String::from(DEFAULT_CPP),
            defines: Vec::new(),
            undefines: Vec::new(),
            include_paths: Vec::new(),
        }
    }
}

impl CppConfig {
    /// Default configuration with the command taken from `CPP` when set.
    pub fn from_env() -> Self {
        Self {
            command: std::env::var("CPP").unwrap_or_else(|_| String::from(DEFAULT_CPP)),
            ..Self::default()
        }
    }
}

/// Run the preprocessor on `input` (`-` for stdin) and split its output
/// into lines. Preprocessor diagnostics go straight to our stderr.
pub fn preprocess(config: &CppConfig, input: &Path) -> Result<SourceLines> {
    let mut words = config.command.split_whitespace();
    let program = words.next().ok_or(Error::EmptyPreprocessor)?;

    let mut cmd = Command::new(program);
    cmd.args(words);
    for define in &config.defines {
        cmd.arg(format!("-D{}", define));
    }
    for undefine in &config.undefines {
        cmd.arg(format!("-U{}", undefine));
    }
    for dir in &config.include_paths {
        cmd.arg(format!("-I{}", dir));
    }
    if input.as_os_str() == "-" {
        cmd.arg("-").stdin(Stdio::inherit());
    } else {
        cmd.arg(input);
    }
    cmd.stderr(Stdio::inherit());

    log::debug!("running preprocessor: {:?}", cmd);
    let output = cmd.output()?;
    if !output.status.success() {
        return Err(Error::Preprocessor {
            command: config.command.clone(),
            status: output.status,
        });
    }

    Ok(SourceLines::read_from(output.stdout.as_slice())?)
}
