// SPDX-License-Identifier: Apache-2.0

//! Diagnostic tables.

use std::fmt::Write;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use twig_core::Diagnostic;

/// Tabulate diagnostics, wrapping to the terminal width when attached to one.
pub fn diagnostics_table(diagnostics: &[Diagnostic], is_tty: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    if is_tty {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    }
    table.set_header(vec!["Comment", "Kind", "Detail"]);
    for diagnostic in diagnostics {
        table.add_row(vec![
            diagnostic.comment_id.to_string(),
            diagnostic.kind.to_string(),
            diagnostic.detail.clone(),
        ]);
    }
    table
}

/// Markdown table of diagnostics.
pub fn diagnostics_markdown(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::from("| Comment | Kind | Detail |\n|---|---|---|\n");
    for diagnostic in diagnostics {
        let _ = writeln!(
            out,
            "| {} | `{}` | {} |",
            diagnostic.comment_id,
            diagnostic.kind,
            diagnostic.detail.replace('|', "\\|")
        );
    }
    out
}
