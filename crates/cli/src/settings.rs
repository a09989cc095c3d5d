// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Editor-style settings that configure both resolvers.
//!
//! Mirrors the `jshint.*` settings block:
//!
//! ```json
//! {
//!   "config": "/abs/path/.jshintrc",
//!   "options": { "esversion": 6, "config": "legacy.json" },
//!   "excludePath": ".lintignore",
//!   "exclude": { "build/**": true }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Settings for one workspace.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Explicit config file, read without `extends` processing.
    #[serde(default)]
    pub config: Option<PathBuf>,

    /// Legacy inline options; may carry its own `config` path.
    #[serde(default)]
    pub options: Option<Map<String, Value>>,

    /// Explicit ignore file.
    #[serde(default)]
    pub exclude_path: Option<PathBuf>,

    /// Default exclude patterns; only `true` entries are active.
    #[serde(default)]
    pub exclude: Map<String, Value>,
}

impl Settings {
    /// Parse settings from JSON text.
    pub fn from_json(text: &str, path: Option<&Path>) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config {
            message: format!("invalid settings: {}", e),
            path: path.map(Path::to_path_buf),
        })
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("cannot read settings file {}: {}", path.display(), e),
            path: Some(path.to_path_buf()),
        })?;
        Self::from_json(&text, Some(path))
    }

    /// Apply command-line overrides for the two explicit paths.
    pub fn with_overrides(
        mut self,
        config: Option<PathBuf>,
        exclude_path: Option<PathBuf>,
    ) -> Self {
        if config.is_some() {
            self.config = config;
        }
        if exclude_path.is_some() {
            self.exclude_path = exclude_path;
        }
        self
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
