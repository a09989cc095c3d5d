// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Side channel for non-fatal resolution problems.
//!
//! Malformed config files and dangling `extends` never abort resolution. They
//! are handed to a [`Reporter`] and resolution carries on with a substitute.

use std::sync::Mutex;

use crate::error::Error;

/// Receives user-facing messages about recoverable resolution errors.
pub trait Reporter {
    fn report(&self, message: &str);

    /// Report a recoverable error by its display text.
    fn report_error(&self, err: &Error) {
        self.report(&err.to_string());
    }
}

/// Logs reports at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

/// Writes reports to stderr, prefixed with the program name.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&self, message: &str) {
        eprintln!("lintrc: {}", message);
    }
}

/// Keeps every report in memory, in order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    messages: Mutex<Vec<String>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the messages reported so far.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, message: &str) {
        tracing::debug!("reported: {}", message);
        match self.messages.lock() {
            Ok(mut guard) => guard.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message);
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
