// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plan command implementation.

use std::path::PathBuf;

use serde::Serialize;

use lintrc::cli::{Cli, OutputFormat, PlanArgs};
use lintrc::error::{Error, ExitCode};
use lintrc::{ConfigDocument, FileWalker, StderrReporter, Validator, WalkerConfig};

#[derive(Serialize)]
struct PlannedFile {
    path: PathBuf,
    excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<ConfigDocument>,
}

#[derive(Serialize)]
struct Plan {
    files: Vec<PlannedFile>,
    included: usize,
    excluded: usize,
}

/// Walk the given paths and report the lint decision for every file.
pub fn run(cli: &Cli, args: &PlanArgs) -> anyhow::Result<ExitCode> {
    let settings = crate::load_settings(cli)?;
    let cwd = std::env::current_dir()?;
    let root = args.root.clone().unwrap_or_else(|| cwd.clone());
    let paths = if args.paths.is_empty() {
        vec![cwd]
    } else {
        args.paths.clone()
    };
    if let Some(missing) = paths.iter().find(|path| !path.exists()) {
        return Err(Error::Argument(format!("no such path: {}", missing.display())).into());
    }

    let walker = FileWalker::new(WalkerConfig {
        max_depth: Some(args.max_depth),
        extensions: args.extensions.clone(),
        ..WalkerConfig::default()
    });
    let mut validator = Validator::new(&settings, StderrReporter);

    let mut plan = Plan {
        files: Vec::new(),
        included: 0,
        excluded: 0,
    };
    for path in &paths {
        let (files, stats) = walker.walk_collect(path);
        tracing::debug!(
            "walked {}: {} files, {} other, {} errors",
            path.display(),
            stats.files_found,
            stats.files_other,
            stats.errors
        );
        for file in files {
            let excluded = validator.excludes(&file, &root);
            let config = match (excluded, args.output) {
                (false, OutputFormat::Json) => Some(validator.options(&file)),
                _ => None,
            };
            if excluded {
                plan.excluded += 1;
            } else {
                plan.included += 1;
            }
            plan.files.push(PlannedFile {
                path: file,
                excluded,
                config,
            });
        }
    }

    match args.output {
        OutputFormat::Text => {
            for file in &plan.files {
                let label = if file.excluded { "excluded" } else { "lint" };
                println!("{:<8} {}", label, file.path.display());
            }
            println!(
                "{} files: {} linted, {} excluded",
                plan.files.len(),
                plan.included,
                plan.excluded
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(ExitCode::Success)
}
