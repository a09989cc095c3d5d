// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source file discovery for `lintrc plan`.
//!
//! Uses the `ignore` crate for traversal. Gitignore rules are off by default:
//! whether a file is linted is the exclude matcher's decision, not the walker's.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories to skip entirely during walking.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (default: 100).
    pub max_depth: Option<usize>,

    /// File extensions to report, without the dot (default: `js`).
    pub extensions: Vec<String>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            extensions: vec!["js".to_string()],
            git_ignore: false,
            hidden: true,
        }
    }
}

/// Statistics from a walk operation.
#[derive(Debug, Default)]
pub struct WalkStats {
    /// Files with a matching extension.
    pub files_found: usize,

    /// Files skipped for their extension.
    pub files_other: usize,

    /// Errors encountered.
    pub errors: usize,
}

/// Sequential file walker.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` (a directory or a single file), returning matching files
    /// in sorted order.
    pub fn walk_collect(&self, root: &Path) -> (Vec<PathBuf>, WalkStats) {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .ignore(false)
            .parents(self.config.git_ignore)
            .max_depth(self.config.max_depth)
            .follow_links(true);

        builder.filter_entry(|entry| {
            !entry.file_type().is_some_and(|t| t.is_dir())
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
        });

        let mut files = Vec::new();
        let mut stats = WalkStats::default();
        for result in builder.build() {
            match result {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    if self.wants(entry.path()) {
                        stats.files_found += 1;
                        files.push(entry.into_path());
                    } else {
                        stats.files_other += 1;
                    }
                }
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                    stats.errors += 1;
                }
            }
        }

        files.sort();
        (files, stats)
    }

    fn wants(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.config.extensions.iter().any(|want| want == ext))
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
