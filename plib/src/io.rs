//
// Copyright (c) 2024 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Open `pathname` for reading, or stdin.
///
/// With `dashed_stdin`, the name `-` selects stdin; otherwise an empty path does.
pub fn input_stream(pathname: &Path, dashed_stdin: bool) -> io::Result<Box<dyn Read>> {
    let path_str = pathname.as_os_str();
    let file: Box<dyn Read> =
        if (dashed_stdin && path_str == "-") || (!dashed_stdin && path_str.is_empty()) {
            Box::new(io::stdin().lock())
        } else {
            Box::new(fs::File::open(pathname)?)
        };

    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_input_stream_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"int x;\n").unwrap();

        let mut buf = String::new();
        input_stream(file.path(), true)
            .unwrap()
            .read_to_string(&mut buf)
            .unwrap();
        assert_eq!(buf, "int x;\n");
    }

    #[test]
    fn test_input_stream_missing_file() {
        let err = input_stream(Path::new("/nonexistent/plib-io-test"), true)
            .err()
            .unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
