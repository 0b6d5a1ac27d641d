// SPDX-License-Identifier: Apache-2.0

//! Organization, project and error download workflow.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use console::style;
use snaglog_core::{
    BugsnagApi, ErrorQuery, LogSink, Prompter, SnaglogError, choose_organization,
    find_organization, forward_all, preview, resolve_project,
};
use tracing::debug;

use super::maybe_spinner;
use super::types::{DownloadOptions, DownloadResult};
use crate::cli::OutputContext;
use crate::output::tables;

/// Runs one download: pick organization, resolve project, fetch and log errors.
///
/// Progress messages and tables are written to `ui`. Every fetched error is
/// handed to `sink` exactly once before the result is returned.
pub async fn run(
    api: &dyn BugsnagApi,
    prompter: &mut dyn Prompter,
    sink: &mut dyn LogSink,
    options: &DownloadOptions,
    log_path: &Path,
    ctx: &OutputContext,
    ui: &mut dyn Write,
) -> Result<DownloadResult> {
    let spinner = maybe_spinner(ctx, "Fetching organizations...");
    let organizations = api.list_organizations().await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let organizations = organizations?;
    if organizations.is_empty() {
        return Err(SnaglogError::NoOrganizations.into());
    }

    writeln!(ui, "{}", style("Available organizations:").bold())?;
    writeln!(ui, "{}", tables::organizations(&organizations))?;
    let organization = match &options.org {
        Some(value) => find_organization(&organizations, value).ok_or_else(|| {
            SnaglogError::OrganizationNotFound {
                input: value.clone(),
            }
        })?,
        None => choose_organization(&organizations, prompter)?,
    };
    writeln!(
        ui,
        "Selected organization: {}",
        style(&organization.name).cyan().bold()
    )?;
    debug!(organization_id = %organization.id, "Organization selected");

    let spinner = maybe_spinner(ctx, "Fetching projects...");
    let projects = api.list_projects(&organization.id).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let projects = projects?;
    if projects.is_empty() {
        return Err(SnaglogError::NoProjects.into());
    }

    writeln!(ui, "{}", style("Available projects:").bold())?;
    writeln!(ui, "{}", tables::projects(&projects))?;
    let project = resolve_project(&projects, options.project.as_deref(), prompter)?;
    writeln!(
        ui,
        "{} {} ({})",
        style("Project found:").green(),
        style(&project.name).bold(),
        project.slug
    )?;
    writeln!(ui, "  ID: {}", project.id)?;
    writeln!(ui, "  Open errors: {}", project.open_error_count)?;

    writeln!(
        ui,
        "Downloading {} errors from the last {} days...",
        options.status, options.days
    )?;
    let query = ErrorQuery::builder()
        .status(options.status.as_str())
        .days(options.days)
        .build();
    let spinner = maybe_spinner(ctx, "Fetching errors...");
    let errors = api.list_errors(&project.id, &query).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }
    let errors = errors?;

    writeln!(ui, "Processing {} errors...", errors.len())?;
    let records = forward_all(&errors, sink);
    writeln!(
        ui,
        "{}",
        style(format!(
            "Successfully saved {} errors to {}",
            records.len(),
            log_path.display()
        ))
        .green()
    )?;

    let shown = preview(&records, &Utc::now());
    Ok(DownloadResult {
        organization: organization.clone(),
        project: project.clone(),
        status: options.status.clone(),
        days: options.days,
        log_path: log_path.to_path_buf(),
        records,
        preview: shown,
    })
}
