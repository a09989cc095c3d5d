// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from a directory up to the filesystem root looking for a named file.

use std::path::{Path, PathBuf};

/// Project config file name.
pub const JSHINTRC: &str = ".jshintrc";

/// Ignore file name.
pub const JSHINTIGNORE: &str = ".jshintignore";

/// npm manifest consulted for an embedded `jshintConfig`.
pub const PACKAGE_JSON: &str = "package.json";

/// Find `name` starting in `start_dir` and walking up to the filesystem root.
///
/// Stops when the current directory has no parent.
pub fn find_upward(start_dir: &Path, name: &str) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}

/// Find `name` starting in the directory that contains `file`.
///
/// A path with no parent (such as `/`) has no directory to search.
pub fn find_upward_from_file(file: &Path, name: &str) -> Option<PathBuf> {
    find_upward(file.parent()?, name)
}

/// Stable identity for a file on disk, used to compare watched paths.
///
/// Falls back to the absolute path when the file does not exist.
pub fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// The user's home directory, from `$HOME`.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
