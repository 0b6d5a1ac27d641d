// SPDX-License-Identifier: Apache-2.0

//! Tables drawn with `comfy-table`.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use snaglog_core::{Organization, Preview, Project};

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header.to_vec());
    table
}

/// Organizations as Name / Slug / ID.
pub fn organizations(orgs: &[Organization]) -> Table {
    let mut table = new_table(&["Name", "Slug", "ID"]);
    for org in orgs {
        table.add_row(vec![&org.name, &org.slug, &org.id]);
    }
    table
}

/// Projects as Name / Slug / ID / Open Errors.
pub fn projects(projects: &[Project]) -> Table {
    let mut table = new_table(&["Name", "Slug", "ID", "Open Errors"]);
    for project in projects {
        table.add_row(vec![
            Cell::new(&project.name),
            Cell::new(&project.slug),
            Cell::new(&project.id),
            Cell::new(project.open_error_count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Preview rows as Error Class / Message / First Seen / File.
pub fn preview(preview: &Preview) -> Table {
    let mut table = new_table(&["Error Class", "Message", "First Seen", "File"]);
    for row in &preview.rows {
        table.add_row(vec![&row.error_class, &row.message, &row.first_seen, &row.file]);
    }
    table
}
