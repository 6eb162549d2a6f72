// SPDX-License-Identifier: Apache-2.0

//! Output rendering for twig commands.
//!
//! Command handlers return data; this module picks the format. JSON and YAML
//! come straight from serde, text and Markdown from [`Renderable`].

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::io::{self, Write};
use twig_core::Diagnostic;

use crate::cli::{OutputContext, OutputFormat};

use table::{diagnostics_markdown, diagnostics_table};

/// Trait for types that can be rendered in multiple output formats.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Render as markdown. Defaults to text rendering.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Render a command result to stdout in the requested format.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    let mut out = io::stdout().lock();
    write_result(result, ctx, &mut out)?;
    out.flush().context("Failed to flush output")
}

fn write_result<T: Renderable>(
    result: &T,
    ctx: &OutputContext,
    w: &mut dyn Write,
) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            writeln!(w, "{json}").context("Failed to write JSON")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_saphyr::to_string(result).context("Failed to serialize to YAML")?;
            writeln!(w, "{}", yaml.trim_end()).context("Failed to write YAML")?;
        }
        OutputFormat::Markdown => {
            result
                .render_markdown(w, ctx)
                .context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            result.render_text(w, ctx).context("Failed to render text")?;
        }
    }
    Ok(())
}

/// `1 comment`, `3 comments`.
pub(crate) fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Warning heading followed by the diagnostics table, for text output.
pub(crate) fn write_diagnostics_text(
    w: &mut dyn Write,
    diagnostics: &[Diagnostic],
    ctx: &OutputContext,
) -> io::Result<()> {
    writeln!(
        w,
        "{}",
        style(count(diagnostics.len(), "diagnostic")).yellow().bold()
    )?;
    if !ctx.quiet {
        writeln!(w, "{}", diagnostics_table(diagnostics, ctx.is_tty))?;
    }
    Ok(())
}

/// `## Diagnostics` section for Markdown output.
pub(crate) fn write_diagnostics_markdown(
    w: &mut dyn Write,
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    writeln!(w, "## Diagnostics")?;
    writeln!(w)?;
    write!(w, "{}", diagnostics_markdown(diagnostics))
}

mod check;
mod schema;
mod table;
mod tree;
