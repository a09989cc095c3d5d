// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ignore-file patterns compiled to glob sets.
//!
//! Patterns follow gitignore conventions:
//! - `*` stays within one path segment, `**` crosses segments
//! - a pattern without an inner `/` matches at any depth
//! - a leading `/` anchors the pattern to the base directory
//! - a pattern naming a directory also matches everything below it
//!
//! Matching is purely lexical and never touches the filesystem, so a trailing
//! `/` does not restrict a pattern to directories: `build/` also matches a
//! file named `build`.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Parse ignore-file text: one pattern per line, blank lines and `#`
/// comments skipped, surrounding whitespace trimmed.
pub fn parse_ignore_file(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}

/// Build a GlobSet from ignore patterns.
///
/// Invalid patterns are logged and skipped.
pub fn build_glob_set(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if pattern.starts_with('!') {
            tracing::warn!("negated ignore pattern '{}' is not supported, skipping", pattern);
            continue;
        }
        for expanded in expand(pattern) {
            match GlobBuilder::new(&expanded).literal_separator(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => {
                    tracing::warn!("invalid glob pattern '{}': {}", pattern, e);
                    break;
                }
            }
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// Rewrite one gitignore-style pattern into the globs that implement it.
fn expand(pattern: &str) -> Vec<String> {
    let trimmed = pattern.trim_end_matches('/');
    let anchored = trimmed.contains('/');
    let core = trimmed.trim_start_matches('/');
    if core.is_empty() {
        return Vec::new();
    }

    let glob = if anchored || core.starts_with("**") {
        core.to_string()
    } else {
        format!("**/{core}")
    };
    if glob == "**" || glob.ends_with("/**") {
        vec![glob]
    } else {
        let below = format!("{glob}/**");
        vec![glob, below]
    }
}

/// `path` relative to `base`, or `path` unchanged when it lies elsewhere.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Compiled patterns plus the directory they are relative to.
#[derive(Debug, Clone)]
pub struct ExcludePatternSet {
    base: PathBuf,
    globs: GlobSet,
}

impl ExcludePatternSet {
    pub fn new(base: impl Into<PathBuf>, globs: GlobSet) -> Self {
        Self {
            base: base.into(),
            globs,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// True if `path`, taken relative to the base, matches any pattern.
    pub fn is_match(&self, path: &Path) -> bool {
        self.globs.is_match(relative_to(path, &self.base))
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
