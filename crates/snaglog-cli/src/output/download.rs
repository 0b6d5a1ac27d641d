// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::DownloadResult;

use super::{Renderable, tables};

impl Renderable for DownloadResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.preview.rows.is_empty() {
            return Ok(());
        }

        writeln!(w)?;
        writeln!(w, "{}", style("Recent errors:").bold())?;
        writeln!(w, "{}", tables::preview(&self.preview))?;

        if self.preview.remaining > 0 {
            writeln!(
                w,
                "{}",
                style(format!(
                    "... and {} more errors. Check {} for complete details.",
                    self.preview.remaining,
                    self.log_path.display()
                ))
                .dim()
            )?;
        }

        Ok(())
    }
}
