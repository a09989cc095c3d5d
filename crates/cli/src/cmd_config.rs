// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config command implementation.

use lintrc::cli::{Cli, ConfigArgs};
use lintrc::error::ExitCode;
use lintrc::{StderrReporter, Validator};

/// Print the resolved configuration for one file as pretty JSON.
pub fn run(cli: &Cli, args: &ConfigArgs) -> anyhow::Result<ExitCode> {
    let settings = crate::load_settings(cli)?;
    let mut validator = Validator::new(&settings, StderrReporter);

    let options = validator.options(&args.file);
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(ExitCode::Success)
}
