// SPDX-License-Identifier: Apache-2.0

//! Rendering of data-quality check results.

use std::io::{self, Write};

use console::style;

use super::table::diagnostics_markdown;
use super::{Renderable, count, write_diagnostics_text};
use crate::cli::OutputContext;
use crate::commands::types::{CheckResult, FileCheck};

fn summary(file: &FileCheck) -> String {
    format!(
        "{} in, {} out, {}",
        count(file.input, "comment"),
        file.output,
        count(file.placeholders.len(), "placeholder")
    )
}

impl Renderable for CheckResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        for file in &self.files {
            if file.diagnostics.is_empty() {
                writeln!(
                    w,
                    "{} {}  {}",
                    style("✓").green(),
                    style(&file.source).bold(),
                    style(summary(file)).dim()
                )?;
                continue;
            }

            write!(w, "{} {}  ", style("✗").red(), style(&file.source).bold())?;
            write_diagnostics_text(w, &file.diagnostics, ctx)?;
        }
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        for file in &self.files {
            writeln!(w, "## {}", file.source)?;
            writeln!(w)?;
            if file.diagnostics.is_empty() {
                writeln!(w, "No problems found ({}).", summary(file))?;
            } else {
                write!(w, "{}", diagnostics_markdown(&file.diagnostics))?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}
