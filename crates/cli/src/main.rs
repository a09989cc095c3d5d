// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lintrc CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use lintrc::cli::{Cli, Command};
use lintrc::error::ExitCode;

mod cmd_config;
mod cmd_excluded;
mod cmd_plan;

fn init_logging() {
    let filter = EnvFilter::try_from_env("LINTRC_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("lintrc: {}", e);
            match e.downcast_ref::<lintrc::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Config(args)) => cmd_config::run(&cli, args),
        Some(Command::Excluded(args)) => cmd_excluded::run(&cli, args),
        Some(Command::Plan(args)) => cmd_plan::run(&cli, args),
    }
}

/// Build settings from the settings file and command-line overrides.
pub(crate) fn load_settings(cli: &Cli) -> lintrc::Result<lintrc::Settings> {
    let settings = match &cli.settings {
        Some(path) => {
            tracing::debug!("loading settings from {}", path.display());
            lintrc::Settings::load(path)?
        }
        None => lintrc::Settings::default(),
    };
    Ok(settings.with_overrides(cli.config.clone(), cli.exclude_path.clone()))
}
