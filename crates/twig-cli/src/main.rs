// SPDX-License-Identifier: Apache-2.0

//! Twig - threaded comment display from flat comment pages.
//!
//! A CLI tool that rebuilds reply order from materialized comment paths,
//! fills in tombstones for ancestors missing from a page, and flags
//! comments whose replies must be fetched separately.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use twig_core::config;

use crate::cli::{Cli, OutputContext};

fn run(cli: Cli) -> Result<()> {
    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let config = config::load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    commands::run(cli.command, &output_ctx, &config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}
