// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Excluded command implementation.

use lintrc::cli::{Cli, ExcludedArgs};
use lintrc::error::ExitCode;
use lintrc::{StderrReporter, Validator};

/// Print `excluded` or `included`; exit 1 when excluded.
pub fn run(cli: &Cli, args: &ExcludedArgs) -> anyhow::Result<ExitCode> {
    let settings = crate::load_settings(cli)?;
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let mut validator = Validator::new(&settings, StderrReporter);

    if validator.excludes(&args.file, &root) {
        println!("excluded");
        Ok(ExitCode::Excluded)
    } else {
        println!("included");
        Ok(ExitCode::Success)
    }
}
