// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve per-file JSHint configuration and ignore decisions
#[derive(Parser)]
#[command(name = "lintrc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file (JSON, editor `jshint.*` block)
    #[arg(short = 's', long = "settings", global = true, env = "LINTRC_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Use specific config file (overrides settings)
    #[arg(short = 'C', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Use specific ignore file (overrides settings)
    #[arg(long = "exclude-path", global = true)]
    pub exclude_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the resolved configuration for a file
    Config(ConfigArgs),
    /// Tell whether a file is excluded from linting
    Excluded(ExcludedArgs),
    /// List files under the given paths with their lint decision
    Plan(PlanArgs),
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    /// File to resolve configuration for
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct ExcludedArgs {
    /// File to test
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Workspace root that settings patterns are relative to (default: cwd)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct PlanArgs {
    /// Files or directories to walk (default: cwd)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Workspace root that settings patterns are relative to (default: cwd)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File extensions to include (repeatable)
    #[arg(long = "ext", value_name = "EXT", default_value = "js")]
    pub extensions: Vec<String>,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = 100)]
    pub max_depth: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
