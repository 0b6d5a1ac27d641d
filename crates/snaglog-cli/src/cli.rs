// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Snaglog.
//!
//! Uses clap's derive API. There are no subcommands: a single invocation
//! walks organization, project and error download in order.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

/// Output format for the downloaded errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables with colors (default)
    #[default]
    Text,
    /// JSON array of log records on stdout
    Json,
    /// YAML list of log records on stdout
    Yaml,
}

/// Global output configuration passed to commands.
#[derive(Clone, Debug)]
pub struct OutputContext {
    /// Output format (text, json, yaml)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Enable verbose output (debug-level logging)
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && self.is_text()
    }

    /// Returns true for the human-readable format.
    pub fn is_text(&self) -> bool {
        matches!(self.format, OutputFormat::Text)
    }
}

/// Snaglog - download recent Bugsnag errors into a local log.
///
/// Lists your Bugsnag organizations and projects, then writes the matching
/// errors of the chosen project to the log file and previews the first ten.
#[derive(Parser, Debug)]
#[command(name = "snaglog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only errors seen in the last N days [default: download.days, 7]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Error status filter (open, resolved, ignored, ...) [default: download.status, open]
    #[arg(long)]
    pub status: Option<String>,

    /// Organization id, slug or name (skips the organization prompt)
    #[arg(long)]
    pub org: Option<String>,

    /// Project name or slug (skips the project prompt)
    #[arg(long)]
    pub project: Option<String>,

    /// Output format (text, json, yaml)
    #[arg(long, short = 'o', default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
