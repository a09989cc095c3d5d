// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file lint configuration resolution.
//!
//! Priority, first match wins:
//! 1. Explicit config file (flat read)
//! 2. `config` path inside the legacy inline options (flat read)
//! 3. Nearest `package.json` with a `jshintConfig` field, else nearest
//!    `.jshintrc` (with `extends`)
//! 4. `~/.jshintrc` (with `extends`)
//! 5. The legacy inline options themselves

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::discovery::{self, JSHINTRC, PACKAGE_JSON};
use crate::document::{self, ConfigDocument, EXTENDS_KEY};
use crate::error::Error;
use crate::reporter::Reporter;

/// `package.json` field holding an embedded config.
pub const PACKAGE_JSON_FIELD: &str = "jshintConfig";

/// Key in the legacy inline options naming a config file.
pub const LEGACY_CONFIG_KEY: &str = "config";

/// Resolves and caches the effective configuration for each file.
#[derive(Debug)]
pub struct ConfigResolver {
    config_file: Option<PathBuf>,
    legacy_options: Option<ConfigDocument>,
    home: Option<PathBuf>,
    cache: HashMap<PathBuf, ConfigDocument>,
    /// Canonical paths of every file a cached entry was read from.
    sources: HashSet<PathBuf>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    /// Create a resolver with no explicit sources, using `$HOME` for the
    /// user-level fallback.
    pub fn new() -> Self {
        Self {
            config_file: None,
            legacy_options: None,
            home: discovery::home_dir(),
            cache: HashMap::new(),
            sources: HashSet::new(),
        }
    }

    /// Override the home directory used for the user-level fallback.
    pub fn with_home(mut self, home: Option<PathBuf>) -> Self {
        self.home = home;
        self.reset();
        self
    }

    /// Replace the explicit config file and legacy inline options.
    pub fn configure(
        &mut self,
        config_file: Option<PathBuf>,
        legacy_options: Option<ConfigDocument>,
    ) {
        self.config_file = config_file;
        self.legacy_options = legacy_options;
        self.reset();
    }

    /// Drop every cached resolution.
    pub fn reset(&mut self) {
        self.cache = HashMap::new();
        self.sources = HashSet::new();
    }

    /// True if a change to `path` could alter a cached or future resolution
    /// beyond what file-name discovery already covers: the configured config
    /// files, and every file a cached resolution read (`extends` parents
    /// included).
    pub fn depends_on(&self, path: &Path) -> bool {
        let path = discovery::canonical(path);
        let legacy = self.legacy_config_file();
        self.sources.contains(&path)
            || self
                .config_file
                .iter()
                .chain(legacy.iter())
                .any(|configured| discovery::canonical(configured) == path)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Effective configuration for `file`, from cache when possible.
    ///
    /// Never fails: problems are reported and degrade to an empty document.
    pub fn get_options(&mut self, file: &Path, reporter: &dyn Reporter) -> ConfigDocument {
        let key = cache_key(file);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let mut sources = HashSet::new();
        let resolved = self.resolve_tracked(&key, reporter, &mut sources);
        self.sources.extend(sources);
        self.cache.insert(key, resolved.clone());
        resolved
    }

    /// Resolve without consulting or filling the cache.
    pub fn resolve(&self, file: &Path, reporter: &dyn Reporter) -> ConfigDocument {
        self.resolve_tracked(file, reporter, &mut HashSet::new())
    }

    fn resolve_tracked(
        &self,
        file: &Path,
        reporter: &dyn Reporter,
        sources: &mut HashSet<PathBuf>,
    ) -> ConfigDocument {
        if let Some(path) = self.config_file.as_deref().filter(|p| p.is_file()) {
            tracing::debug!("using explicit config {}", path.display());
            return flat(path, reporter);
        }

        if let Some(path) = self.legacy_config_file().filter(|p| p.is_file()) {
            tracing::debug!("using legacy config {}", path.display());
            return flat(&path, reporter);
        }

        if !file.as_os_str().is_empty() {
            if let Some(config) = package_json_config(file, reporter, sources) {
                return config;
            }
            if let Some(rc) = discovery::find_upward_from_file(file, JSHINTRC) {
                tracing::debug!("using project config {}", rc.display());
                return document::load_tracked(&rc, reporter, sources);
            }
        }

        if let Some(rc) = self.home_config() {
            tracing::debug!("using home config {}", rc.display());
            return document::load_tracked(&rc, reporter, sources);
        }

        let mut options = self.legacy_options.clone().unwrap_or_default();
        options.remove(EXTENDS_KEY);
        options
    }

    fn legacy_config_file(&self) -> Option<PathBuf> {
        self.legacy_options
            .as_ref()?
            .get(LEGACY_CONFIG_KEY)?
            .as_str()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    fn home_config(&self) -> Option<PathBuf> {
        let rc = self.home.as_ref()?.join(JSHINTRC);
        rc.is_file().then_some(rc)
    }
}

fn cache_key(file: &Path) -> PathBuf {
    if file.as_os_str().is_empty() {
        return PathBuf::new();
    }
    std::path::absolute(file).unwrap_or_else(|_| file.to_path_buf())
}

fn flat(path: &Path, reporter: &dyn Reporter) -> ConfigDocument {
    document::read_flat(path).unwrap_or_else(|err| {
        reporter.report_error(&err);
        ConfigDocument::new()
    })
}

/// `jshintConfig` from the nearest `package.json`, if it has one.
///
/// A malformed manifest is reported and treated as having no config.
fn package_json_config(
    file: &Path,
    reporter: &dyn Reporter,
    sources: &mut HashSet<PathBuf>,
) -> Option<ConfigDocument> {
    let manifest = discovery::find_upward_from_file(file, PACKAGE_JSON)?;
    sources.insert(discovery::canonical(&manifest));
    let mut package = match document::read_document(&manifest, None) {
        Ok(package) => package,
        Err(err) => {
            reporter.report_error(&err);
            return None;
        }
    };

    let embedded = package.remove(PACKAGE_JSON_FIELD)?;
    tracing::debug!("using {} from {}", PACKAGE_JSON_FIELD, manifest.display());
    match embedded {
        Value::Object(mut config) => {
            config.remove(EXTENDS_KEY);
            Some(config)
        }
        _ => {
            reporter.report_error(&Error::NotAnObject {
                path: manifest,
                extended_by: None,
            });
            Some(ConfigDocument::new())
        }
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
