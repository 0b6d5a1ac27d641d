// SPDX-License-Identifier: Apache-2.0

//! Command handlers for Snaglog CLI.

pub mod download;
pub mod types;

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use snaglog_core::{BugsnagApi, TracingSink};

use crate::cli::OutputContext;
use crate::output;
use crate::prompt::DialoguerPrompter;
use types::DownloadOptions;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() {
        let s = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            s.set_style(style);
        }
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Writer for progress messages and selection tables.
///
/// Stdout in text mode. Structured formats keep stdout for the document, so
/// progress goes to stderr, or nowhere with `--quiet`.
fn progress_writer(ctx: &OutputContext) -> Box<dyn Write> {
    if ctx.is_text() {
        Box::new(io::stdout())
    } else if ctx.quiet {
        Box::new(io::sink())
    } else {
        Box::new(io::stderr())
    }
}

/// Runs the download against the live terminal and log sink, then renders the result.
pub async fn run(
    api: &dyn BugsnagApi,
    options: &DownloadOptions,
    log_path: &Path,
    ctx: &OutputContext,
) -> Result<()> {
    let mut prompter = DialoguerPrompter::default();
    let mut sink = TracingSink;
    let mut ui = progress_writer(ctx);

    let result = download::run(
        api,
        &mut prompter,
        &mut sink,
        options,
        log_path,
        ctx,
        &mut *ui,
    )
    .await?;

    output::render(&result, ctx, &mut io::stdout())
}
