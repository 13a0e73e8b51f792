//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Signature capture and prototype normalization
//

use std::fmt;

use crate::classify::CandidateSignature;
use crate::lines::SourceLines;

/// Qualifier placed in front of every emitted prototype.
pub const QUALIFIER: &str = "extern";

/// Storage-class words that mark a definition as not externally callable
/// when they follow the qualifier.
const STORAGE_WORDS: &[&str] = &["static", "extern", "typedef"];

// ============================================================================
// Capture / Clean / Filter
// ============================================================================

/// Raw signature text: the lines before `stop_line` in full, then `stop_line`
/// up to and including its closing parenthesis, then a `;` token.
pub fn capture(lines: &SourceLines, sig: &CandidateSignature) -> String {
    let mut text = lines.join(sig.start_line..sig.stop_line, "\n");
    let stop = lines.line(sig.stop_line).unwrap_or("");
    let head = stop.get(..sig.close_paren + 1).unwrap_or(stop);

    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(head);
    text.push_str(" ;");
    text
}

/// Normalize captured text into a single prototype line.
///
/// Every `(` gets a space on both sides and every `)` a space before it;
/// all other whitespace collapses to single spaces. The result starts with
/// [`QUALIFIER`].
pub fn clean(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() * 2);
    for ch in raw.chars() {
        match ch {
            '(' => spaced.push_str(" ( "),
            ')' => spaced.push_str(" )"),
            _ => spaced.push(ch),
        }
    }

    let mut out = String::from(QUALIFIER);
    for word in spaced.split_whitespace() {
        out.push(' ');
        out.push_str(word);
    }
    out
}

/// False when the word after the qualifier is a storage-class specifier.
pub fn is_exported(cleaned: &str) -> bool {
    match cleaned.split_whitespace().nth(1) {
        Some(word) => !STORAGE_WORDS.contains(&word),
        None => true,
    }
}

// ============================================================================
// Prototype
// ============================================================================

/// One cleaned, `;`-terminated prototype line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prototype(String);

impl Prototype {
    /// Capture and clean `sig`, returning `None` when the filter rejects it.
    pub fn from_signature(lines: &SourceLines, sig: &CandidateSignature) -> Option<Self> {
        let cleaned = clean(&capture(lines, sig));
        if is_exported(&cleaned) {
            Some(Self(cleaned))
        } else {
            log::debug!("line {}: rejected '{}'", sig.start_line + 1, cleaned);
            None
        }
    }

    /// Prepend `prefix` and a space, e.g. an export annotation. An empty
    /// prefix leaves the prototype unchanged.
    pub fn with_prefix(self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self;
        }
        Self(format!("{} {}", prefix, self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(start_line: usize, stop_line: usize, close_paren: usize) -> CandidateSignature {
        CandidateSignature {
            start_line,
            stop_line,
            close_paren,
        }
    }

    #[test]
    fn test_capture_single_line() {
        let lines = SourceLines::from_text("int foo(int a, int b) { return a + b; }");
        assert_eq!(capture(&lines, &sig(0, 0, 20)), "int foo(int a, int b) ;");
    }

    #[test]
    fn test_capture_multi_line() {
        let lines = SourceLines::from_text("unsigned\nlong\nsum(int n,\n    int m)\n{");
        assert_eq!(
            capture(&lines, &sig(0, 3, 9)),
            "unsigned\nlong\nsum(int n,\n    int m) ;"
        );
    }

    #[test]
    fn test_clean_spacing() {
        assert_eq!(
            clean("int foo(int a, int b) ;"),
            "extern int foo ( int a, int b ) ;"
        );
        assert_eq!(clean("void\nbar(void) ;"), "extern void bar ( void ) ;");
        assert_eq!(
            clean("char  *\tname(  const char *s  ) ;"),
            "extern char * name ( const char *s ) ;"
        );
    }

    #[test]
    fn test_clean_nested_parens() {
        assert_eq!(
            clean("int apply(int (*fn)(int), int x) ;"),
            "extern int apply ( int ( *fn ) ( int ), int x ) ;"
        );
    }

    #[test]
    fn test_clean_empty_capture() {
        assert_eq!(clean(""), QUALIFIER);
        assert!(is_exported(QUALIFIER));
    }

    #[test]
    fn test_filter_storage_words() {
        assert!(!is_exported("extern static void bar ( void ) ;"));
        assert!(!is_exported("extern extern int x ( void ) ;"));
        assert!(!is_exported("extern typedef int fn ( void ) ;"));
        assert!(is_exported("extern int foo ( void ) ;"));
        assert!(is_exported("extern const char *staticname ( void ) ;"));
    }

    #[test]
    fn test_prototype_from_signature() {
        let lines = SourceLines::from_text("static void bar(void) { }\nint baz(void) { }");
        assert_eq!(Prototype::from_signature(&lines, &sig(0, 0, 20)), None);

        let proto = Prototype::from_signature(&lines, &sig(1, 1, 12)).unwrap();
        assert_eq!(proto.as_str(), "extern int baz ( void ) ;");
        assert_eq!(
            proto.with_prefix("__declspec(dllexport)").to_string(),
            "__declspec(dllexport) extern int baz ( void ) ;"
        );
    }

    #[test]
    fn test_empty_prefix_is_no_prefix() {
        let lines = SourceLines::from_text("int f(void) { }");
        let proto = Prototype::from_signature(&lines, &sig(0, 0, 10)).unwrap();
        assert_eq!(proto.with_prefix("").as_str(), "extern int f ( void ) ;");
    }
}
