// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file include/exclude decisions.
//!
//! Priority, first match wins:
//! 1. Explicit ignore file, patterns relative to the root
//! 2. Nearest `.jshintignore`, patterns relative to its own directory
//! 3. Default patterns from settings, relative to the root

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use serde_json::{Map, Value};

use crate::discovery::{self, JSHINTIGNORE};
use crate::error::Error;
use crate::pattern::{self, ExcludePatternSet};
use crate::reporter::Reporter;

/// Decides whether files are skipped, caching each decision.
#[derive(Debug)]
pub struct ExcludeMatcher {
    ignore_file: Option<PathBuf>,
    defaults: GlobSet,
    cache: HashMap<PathBuf, bool>,
    /// Compiled ignore files, dropped together with `cache`.
    ignore_sets: HashMap<PathBuf, GlobSet>,
}

impl Default for ExcludeMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ExcludeMatcher {
    pub fn new() -> Self {
        Self {
            ignore_file: None,
            defaults: GlobSet::empty(),
            cache: HashMap::new(),
            ignore_sets: HashMap::new(),
        }
    }

    /// Replace the explicit ignore file and the default patterns.
    ///
    /// Only keys of `exclude` whose value is exactly `true` become patterns.
    pub fn configure(&mut self, ignore_file: Option<PathBuf>, exclude: &Map<String, Value>) {
        let patterns: Vec<String> = exclude
            .iter()
            .filter(|(_, enabled)| **enabled == Value::Bool(true))
            .map(|(pattern, _)| pattern.clone())
            .collect();
        tracing::debug!("default exclude patterns: {:?}", patterns);

        self.ignore_file = ignore_file;
        self.defaults = pattern::build_glob_set(&patterns);
        self.reset();
    }

    /// Drop every cached decision and compiled ignore file.
    pub fn reset(&mut self) {
        self.cache = HashMap::new();
        self.ignore_sets = HashMap::new();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// True if `path` is the configured ignore file or an ignore file a
    /// cached decision was read from.
    pub fn depends_on(&self, path: &Path) -> bool {
        let path = discovery::canonical(path);
        self.ignore_file
            .iter()
            .chain(self.ignore_sets.keys())
            .any(|source| discovery::canonical(source) == path)
    }

    /// True if `file` should not be linted.
    ///
    /// An empty path is always excluded.
    pub fn excludes(&mut self, file: &Path, root: &Path, reporter: &dyn Reporter) -> bool {
        if file.as_os_str().is_empty() {
            return true;
        }

        let file = std::path::absolute(file).unwrap_or_else(|_| file.to_path_buf());
        if let Some(&cached) = self.cache.get(&file) {
            return cached;
        }

        let root = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
        let patterns = self.active_patterns(&file, &root, reporter);
        let excluded = patterns.is_match(&file);
        tracing::debug!(
            "{} {} (patterns relative to {})",
            file.display(),
            if excluded { "excluded" } else { "included" },
            patterns.base().display()
        );

        self.cache.insert(file, excluded);
        excluded
    }

    fn active_patterns(
        &mut self,
        file: &Path,
        root: &Path,
        reporter: &dyn Reporter,
    ) -> ExcludePatternSet {
        if let Some(ignore_file) = self.ignore_file.clone().filter(|p| p.is_file()) {
            let globs = self.load_ignore_file(&ignore_file, reporter);
            return ExcludePatternSet::new(root, globs);
        }

        if let Some(ignore_file) = discovery::find_upward_from_file(file, JSHINTIGNORE) {
            let globs = self.load_ignore_file(&ignore_file, reporter);
            let base = ignore_file.parent().unwrap_or(root).to_path_buf();
            return ExcludePatternSet::new(base, globs);
        }

        ExcludePatternSet::new(root, self.defaults.clone())
    }

    fn load_ignore_file(&mut self, path: &Path, reporter: &dyn Reporter) -> GlobSet {
        if let Some(globs) = self.ignore_sets.get(path) {
            return globs.clone();
        }

        let globs = match fs::read_to_string(path) {
            Ok(text) => pattern::build_glob_set(&pattern::parse_ignore_file(&text)),
            Err(source) => {
                reporter.report_error(&Error::IgnoreFile {
                    path: path.to_path_buf(),
                    source,
                });
                GlobSet::empty()
            }
        };
        self.ignore_sets.insert(path.to_path_buf(), globs.clone());
        globs
    }
}

#[cfg(test)]
#[path = "exclude_tests.rs"]
mod tests;
