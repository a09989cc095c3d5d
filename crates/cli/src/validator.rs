// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file validation: exclude check, option resolution, lint engine call.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::discovery::{JSHINTIGNORE, JSHINTRC, PACKAGE_JSON};
use crate::document::ConfigDocument;
use crate::exclude::ExcludeMatcher;
use crate::reporter::Reporter;
use crate::resolver::ConfigResolver;
use crate::settings::Settings;

/// Config key whose value is passed to the engine as its globals.
pub const GLOBALS_KEY: &str = "globals";

/// One raw finding from the lint engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub id: String,
    pub code: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub character: u32,
    pub reason: String,
}

/// The external linter.
pub trait LintEngine {
    fn lint(
        &mut self,
        text: &str,
        config: &ConfigDocument,
        globals: Option<&Value>,
    ) -> Vec<Finding>;
}

/// Owns both resolvers and the reporting side channel.
pub struct Validator<R: Reporter> {
    resolver: ConfigResolver,
    matcher: ExcludeMatcher,
    reporter: R,
}

impl<R: Reporter> Validator<R> {
    pub fn new(settings: &Settings, reporter: R) -> Self {
        Self::with_resolver(ConfigResolver::new(), settings, reporter)
    }

    /// Start from a prepared resolver (for a custom home directory).
    pub fn with_resolver(resolver: ConfigResolver, settings: &Settings, reporter: R) -> Self {
        let mut validator = Self {
            resolver,
            matcher: ExcludeMatcher::new(),
            reporter,
        };
        validator.configure(settings);
        validator
    }

    /// Apply new settings to both resolvers, clearing their caches.
    pub fn configure(&mut self, settings: &Settings) {
        self.resolver
            .configure(settings.config.clone(), settings.options.clone());
        self.matcher
            .configure(settings.exclude_path.clone(), &settings.exclude);
    }

    /// Reset both caches if any changed path is a config, ignore or
    /// manifest file, a configured explicit file, or a file a cached result
    /// was read from (such as an `extends` parent). Returns true when a
    /// reset happened.
    pub fn on_watched_files_changed<P: AsRef<Path>>(&mut self, changed: &[P]) -> bool {
        let relevant = changed.iter().any(|path| {
            let path: &Path = path.as_ref();
            is_watched_name(path)
                || self.resolver.depends_on(path)
                || self.matcher.depends_on(path)
        });
        if relevant {
            tracing::debug!("watched config files changed, resetting caches");
            self.resolver.reset();
            self.matcher.reset();
        }
        relevant
    }

    pub fn excludes(&mut self, file: &Path, root: &Path) -> bool {
        self.matcher.excludes(file, root, &self.reporter)
    }

    pub fn options(&mut self, file: &Path) -> ConfigDocument {
        self.resolver.get_options(file, &self.reporter)
    }

    /// Lint `text` as the content of `file`.
    ///
    /// Returns `None` when the file is excluded; the engine is not called.
    pub fn validate<E: LintEngine + ?Sized>(
        &mut self,
        file: &Path,
        text: &str,
        root: &Path,
        engine: &mut E,
    ) -> Option<Vec<Finding>> {
        if self.excludes(file, root) {
            tracing::debug!("skipping excluded file {}", file.display());
            return None;
        }

        let options = self.options(file);
        Some(engine.lint(text, &options, options.get(GLOBALS_KEY)))
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

fn is_watched_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| matches!(name, JSHINTRC | JSHINTIGNORE | PACKAGE_JSON))
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
