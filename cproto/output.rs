//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use crate::capture::Prototype;

/// Render prototypes one per line, optionally wrapped in include guards.
pub fn render(prototypes: &[Prototype], guard: Option<&str>) -> String {
    let body: Vec<&str> = prototypes.iter().map(Prototype::as_str).collect();
    let mut text = body.join("\n");
    if !text.is_empty() {
        text.push('\n');
    }

    match guard {
        Some(name) => format!(
            "#ifndef {name}\n#define {name}\n\n{text}\n#endif /* {name} */\n"
        ),
        None => text,
    }
}
