//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing lintrc CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Home directory used by default so a developer's own ~/.jshintrc never
/// leaks into a spec.
pub const NO_HOME: &str = "/nonexistent/lintrc-spec-home";

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the lintrc binary
pub fn lintrc_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("lintrc"));
    cmd.env_remove("LINTRC_SETTINGS").env("HOME", NO_HOME);
    cmd
}

/// Create a builder for `lintrc config <FILE>`
pub fn config(file: &str) -> RunBuilder {
    RunBuilder::new(&["config", file])
}

/// Create a builder for `lintrc excluded <FILE>`
pub fn excluded(file: &str) -> RunBuilder {
    RunBuilder::new(&["excluded", file])
}

/// Create a builder for `lintrc plan`
pub fn plan() -> RunBuilder {
    RunBuilder::new(&["plan"])
}

/// Fluent command builder
pub struct RunBuilder {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl RunBuilder {
    fn new(args: &[&str]) -> Self {
        Self {
            dir: None,
            args: args.iter().map(|s| s.to_string()).collect(),
            envs: Vec::new(),
        }
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Use `path` as the home directory
    pub fn home(self, path: &Path) -> Self {
        let home = path.to_string_lossy().into_owned();
        self.env("HOME", &home)
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }

    /// Run, expect success, and parse stdout as JSON
    pub fn json(self) -> serde_json::Value {
        let output = self.passes();
        serde_json::from_slice(&output.output.stdout).expect("valid JSON")
    }

    fn command(self) -> Command {
        let mut cmd = lintrc_cmd();
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Result of a finished run
pub struct RunAssert {
    pub output: Output,
}

#[allow(dead_code)]
impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout matches predicate
    pub fn stdout_has<P: Predicate<str>>(self, predicate: impl IntoStrPredicate<P>) -> Self {
        let stdout = self.stdout();
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout does not match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does NOT match predicate
    pub fn stdout_lacks<P: Predicate<str>>(self, predicate: impl IntoStrPredicate<P>) -> Self {
        let stdout = self.stdout();
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate
    pub fn stderr_has<P: Predicate<str>>(self, predicate: impl IntoStrPredicate<P>) -> Self {
        let stderr = self.stderr();
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr does not match predicate:\n{}",
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary test project directory with helper methods.
///
/// # Examples
///
/// ```ignore
/// let temp = Project::empty();
/// temp.file(".jshintrc", r#"{ "curly": true }"#);
/// temp.file("src/app.js", "var a;");
/// config("src/app.js").pwd(temp.path()).passes();
/// ```
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a project file, as a string argument
    pub fn arg(&self, path: &str) -> String {
        self.dir.path().join(path).to_string_lossy().into_owned()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}
