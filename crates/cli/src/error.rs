// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// lintrc error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file could not be read.
    #[error("Failed to read jshint configuration from file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON after comment stripping.
    #[error(
        "Failed to read jshint configuration from file {}{}: {source}",
        .path.display(),
        extended_by_suffix(.extended_by)
    )]
    Parse {
        path: PathBuf,
        extended_by: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },

    /// Config file parsed, but its top-level value is not an object.
    #[error(
        "Failed to read jshint configuration from file {}{}: expected a JSON object",
        .path.display(),
        extended_by_suffix(.extended_by)
    )]
    NotAnObject {
        path: PathBuf,
        extended_by: Option<PathBuf>,
    },

    /// Ignore file could not be read.
    #[error("Failed to read ignore file {}: {source}", .path.display())]
    IgnoreFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `extends` names a file that does not exist.
    #[error("Can't find config file: {} (extended by {})", .path.display(), .child.display())]
    MissingExtends { path: PathBuf, child: PathBuf },

    /// `extends` leads back to a file already on the chain.
    #[error("Circular extends: {} (extended by {})", .path.display(), .child.display())]
    ExtendsCycle { path: PathBuf, child: PathBuf },

    /// `extends` is present but not a string.
    #[error("Invalid extends in {}: expected a relative path string", .path.display())]
    InvalidExtends { path: PathBuf },

    /// Settings file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),
}

fn extended_by_suffix(extended_by: &Option<PathBuf>) -> String {
    match extended_by {
        Some(child) => format!(" (extended by {})", child.display()),
        None => String::new(),
    }
}

/// Result type using lintrc Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded (file included, plan printed)
    Success = 0,
    /// The queried file is excluded from linting
    Excluded = 1,
    /// Settings or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. }
            | Error::IgnoreFile { .. }
            | Error::Parse { .. }
            | Error::NotAnObject { .. }
            | Error::MissingExtends { .. }
            | Error::ExtendsCycle { .. }
            | Error::InvalidExtends { .. } => ExitCode::ConfigError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
