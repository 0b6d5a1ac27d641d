// SPDX-License-Identifier: Apache-2.0

//! Snaglog - download recent Bugsnag errors into a local log.
//!
//! Picks a Bugsnag organization and project, writes the project's recent
//! errors to the log file and previews the first ten in a table.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod prompt;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use snaglog_core::{BugsnagClient, config};
use tracing::debug;

use crate::cli::{Cli, OutputContext};
use crate::commands::types::DownloadOptions;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let config = config::load_config()?;
    // Resolve the token before logging creates the log file.
    let token = config.token()?;

    let log_path = logging::init_logging(&config.log, output_ctx.verbose)?;
    debug!("Configuration loaded successfully");

    let client = BugsnagClient::from_config(token, &config.bugsnag)
        .context("Failed to create Bugsnag client")?;
    debug!(base_url = client.base_url(), "Bugsnag client ready");

    let options = DownloadOptions {
        status: cli.status.unwrap_or(config.download.status),
        days: cli.days.unwrap_or(config.download.days),
        org: cli.org,
        project: cli.project,
    };
    debug!(status = %options.status, days = options.days, "Download filters");

    commands::run(&client, &options, &log_path, &output_ctx).await
}
