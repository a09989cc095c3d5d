// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Comment stripping for JSON-with-comments config files.
//!
//! A single regex alternation scans the text left to right. Each match is one of
//! four mutually exclusive tokens: a double-quoted string, a single-quoted
//! string, a block comment, or a line comment. Strings are kept verbatim, so a
//! `//` or `/*` inside a string literal is never treated as a comment.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Strings (groups 1 and 2) or comments (group 3 block, group 4 line).
///
/// Line comments stop before `\r` and `\n` so the terminator survives.
#[allow(clippy::expect_used)]
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"("(?:[^"\\]|\\(?s:.))*")|('(?:[^'\\]|\\(?s:.))*')|(/\*(?s:.*?)\*/)|(//[^\r\n]*)"#,
    )
    .expect("valid regex")
});

/// Remove `/* ... */` and `// ...` comments, leaving string literals untouched.
///
/// Unterminated strings and block comments are left as-is; the JSON parser
/// reports them.
pub fn strip_comments(text: &str) -> Cow<'_, str> {
    if !text.contains('/') {
        return Cow::Borrowed(text);
    }

    TOKEN_RE.replace_all(text, |caps: &Captures<'_>| {
        if caps.get(3).is_some() || caps.get(4).is_some() {
            String::new()
        } else {
            caps[0].to_string()
        }
    })
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
