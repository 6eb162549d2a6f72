// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use super::Renderable;
use crate::cli::OutputContext;
use crate::commands::types::SchemaResult;

impl Renderable for SchemaResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "{}", serde_json::to_string_pretty(&self.schema)?)
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "```json")?;
        writeln!(w, "{}", serde_json::to_string_pretty(&self.schema)?)?;
        writeln!(w, "```")
    }
}
