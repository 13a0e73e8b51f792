//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// cproto - extract function prototypes from preprocessed C source
//

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use gettextrs::{
    bind_textdomain_codeset, gettext, ngettext, setlocale, textdomain, LocaleCategory,
};
use plib::io::input_stream;
use plib::PROJECT_NAME;
use posixutils_cproto::cpp::{self, CppConfig};
use posixutils_cproto::output::render;
use posixutils_cproto::{extract, ExtractOptions, SourceLines};

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser)]
#[command(
    version,
    about = gettext("cproto - extract function prototypes from preprocessed C source")
)]
struct Args {
    /// Text placed before each prototype
    #[arg(short = 'p', long, value_name = "string", help = gettext("Prepend string to each prototype"))]
    prefix: Option<String>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long, value_name = "file", help = gettext("Write prototypes to file"))]
    output: Option<PathBuf>,

    /// Include guard macro
    #[arg(short = 'g', long, value_name = "macro", help = gettext("Wrap output in include guards"))]
    guard: Option<String>,

    /// Suppress the per-file count report
    #[arg(short = 'q', long, help = gettext("Do not report prototype counts"))]
    quiet: bool,

    /// Run input through $CPP (default: cc -E) first
    #[arg(short = 'E', long, help = gettext("Run input through the C preprocessor first"))]
    preprocess: bool,

    /// Define a macro for the preprocessor
    #[arg(short = 'D', value_name = "macro", help = gettext("Define macro for the preprocessor"))]
    defines: Vec<String>,

    /// Undefine a macro for the preprocessor
    #[arg(short = 'U', value_name = "macro", help = gettext("Undefine macro for the preprocessor"))]
    undefines: Vec<String>,

    /// Add include path for the preprocessor
    #[arg(short = 'I', value_name = "dir", help = gettext("Add include directory for the preprocessor"))]
    include_paths: Vec<String>,

    /// Input files
    #[arg(help = gettext("Preprocessed C source files; - or none for stdin"))]
    files: Vec<PathBuf>,
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        String::from("(stdin)")
    } else {
        path.display().to_string()
    }
}

fn load(
    args: &Args,
    cpp_config: &CppConfig,
    path: &Path,
) -> posixutils_cproto::Result<SourceLines> {
    if args.preprocess {
        cpp::preprocess(cpp_config, path)
    } else {
        Ok(SourceLines::read_from(input_stream(path, true)?)?)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;
    env_logger::init();

    let mut args = Args::parse();
    if args.files.is_empty() {
        args.files.push(PathBuf::from("-"));
    }

    let cpp_config = CppConfig {
        defines: args.defines.clone(),
        undefines: args.undefines.clone(),
        include_paths: args.include_paths.clone(),
        ..CppConfig::from_env()
    };
    let options = ExtractOptions {
        prefix: args.prefix.clone().filter(|p| !p.is_empty()),
    };

    let mut exit_code = 0;
    let mut prototypes = Vec::new();

    for path in &args.files {
        let name = display_name(path);

        let lines = match load(&args, &cpp_config, path) {
            Ok(lines) => lines,
            Err(e) => {
                exit_code = 1;
                eprintln!("cproto: {}: {}", name, e);
                continue;
            }
        };

        let extraction = extract(&lines, &options);

        if !args.quiet {
            let n = extraction.len();
            eprintln!(
                "cproto: {}: {} {}",
                name,
                n,
                ngettext("prototype extracted", "prototypes extracted", n as u32)
            );
        }
        if let Some(e) = extraction.error() {
            exit_code = 1;
            eprintln!(
                "cproto: {}: {}: {}",
                name,
                gettext("incomplete parse, output is partial"),
                e
            );
        }

        prototypes.extend(extraction.into_prototypes());
    }

    let text = render(&prototypes, args.guard.as_deref());
    match &args.output {
        Some(path) => fs::write(path, text)?,
        None => io::stdout().write_all(text.as_bytes())?,
    }

    std::process::exit(exit_code)
}
