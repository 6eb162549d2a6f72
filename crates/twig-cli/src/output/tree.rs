// SPDX-License-Identifier: Apache-2.0

//! Rendering of built comment trees.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use console::style;
use twig_core::{CommentPath, CommentRecord, format_relative_time, single_line, truncate};

use super::{Renderable, count, write_diagnostics_markdown, write_diagnostics_text};
use crate::cli::OutputContext;
use crate::commands::types::TreeResult;

/// Longest comment body shown on one line.
const BODY_WIDTH: usize = 100;

/// Deepest level that still gets its own indentation step.
const MAX_NESTING: usize = 32;

/// Indentation level taken from the path, not the untrusted `depth` field.
fn nesting(comment: &CommentRecord) -> usize {
    CommentPath::parse(&comment.path)
        .map_or(0, |path| path.ids().len() - 1)
        .min(MAX_NESTING)
}

/// Label shown instead of the body for hidden comments.
fn tombstone_label(comment: &CommentRecord) -> Option<&'static str> {
    if comment.placeholder {
        Some("[missing]")
    } else if comment.removed {
        Some("[removed]")
    } else if comment.deleted {
        Some("[deleted]")
    } else {
        None
    }
}

/// Author, score and age, e.g. `alice · 3 points · 2 days ago`.
fn byline(comment: &CommentRecord, now: DateTime<Utc>) -> String {
    let author = comment.creator.as_deref().unwrap_or("anonymous");
    let points = if comment.score.abs() == 1 {
        "point"
    } else {
        "points"
    };
    let mut line = format!("{author} · {} {points}", comment.score);
    if let Some(published) = &comment.published {
        line.push_str(" · ");
        line.push_str(&format_relative_time(published, now));
    }
    line
}

fn load_more_label(comment: &CommentRecord) -> String {
    match comment.child_count {
        1 => "load 1 more reply".to_string(),
        n => format!("load {n} more replies"),
    }
}

impl TreeResult {
    fn visible(&self) -> impl Iterator<Item = &CommentRecord> {
        self.report
            .comments
            .iter()
            .filter(|c| self.ui.show_placeholders || !c.placeholder)
    }
}

impl Renderable for TreeResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let now = Utc::now();

        if self.report.comments.is_empty() {
            writeln!(w, "{}", style("No comments.").dim())?;
        }

        for comment in self.visible() {
            let indent = " ".repeat(nesting(comment) * self.ui.indent_width);
            let id = style(format!("#{}", comment.id)).dim();

            match tombstone_label(comment) {
                Some(label) => writeln!(w, "{indent}{} {id}", style(label).dim())?,
                None => writeln!(w, "{indent}{} {id}", style(byline(comment, now)).bold())?,
            }
            if ctx.verbose {
                writeln!(w, "{indent}  {}", style(format!("path {}", comment.path)).dim())?;
            }
            if tombstone_label(comment).is_none() && !comment.text.is_empty() {
                writeln!(w, "{indent}  {}", truncate(&single_line(&comment.text), BODY_WIDTH))?;
            }
            if comment.load_more_visible {
                let child_indent = " ".repeat(self.ui.indent_width);
                writeln!(
                    w,
                    "{indent}{child_indent}{}",
                    style(format!("↳ {}", load_more_label(comment))).cyan()
                )?;
            }
        }

        if ctx.quiet {
            return Ok(());
        }

        writeln!(w)?;
        writeln!(
            w,
            "{}",
            style(format!(
                "{}, {}",
                count(self.report.comments.len(), "comment"),
                count(self.report.placeholders.len(), "placeholder")
            ))
            .dim()
        )?;

        if !self.report.diagnostics.is_empty() {
            write_diagnostics_text(w, &self.report.diagnostics, ctx)?;
        }
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let now = Utc::now();
        writeln!(w, "## Comments")?;
        writeln!(w)?;

        if self.report.comments.is_empty() {
            writeln!(w, "_No comments._")?;
        }

        for comment in self.visible() {
            let indent = "  ".repeat(nesting(comment));
            match tombstone_label(comment) {
                Some(label) => writeln!(w, "{indent}- _{label}_")?,
                None => {
                    let body = truncate(&single_line(&comment.text), BODY_WIDTH);
                    writeln!(w, "{indent}- **{}**: {body}", byline(comment, now))?;
                }
            }
            if comment.load_more_visible {
                writeln!(w, "{indent}  - _{}_", load_more_label(comment))?;
            }
        }

        if !ctx.quiet && !self.report.diagnostics.is_empty() {
            writeln!(w)?;
            write_diagnostics_markdown(w, &self.report.diagnostics)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use twig_core::{CommentTreeBuilder, UiConfig};

    use super::*;
    use crate::cli::OutputFormat;

    fn ctx(quiet: bool) -> OutputContext {
        OutputContext {
            format: OutputFormat::Text,
            quiet,
            verbose: false,
            is_tty: false,
        }
    }

    fn result(comments: Vec<CommentRecord>, ui: UiConfig) -> TreeResult {
        let builder = CommentTreeBuilder::new(1);
        TreeResult {
            sources: vec!["test.json".to_string()],
            root_id: None,
            max_depth: builder.max_depth(),
            report: builder.build_report(comments, None),
            ui,
        }
    }

    fn render_text(result: &TreeResult, quiet: bool) -> String {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        result.render_text(&mut out, &ctx(quiet)).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample() -> Vec<CommentRecord> {
        vec![
            CommentRecord::builder()
                .id(1)
                .path("0.1")
                .depth(0)
                .creator("alice")
                .score(3)
                .text("Top-level\nthoughts")
                .build(),
            CommentRecord::builder()
                .id(3)
                .path("0.1.2.3")
                .depth(2)
                .creator("bob")
                .text("Deep reply")
                .build(),
            CommentRecord::builder()
                .id(4)
                .path("0.4")
                .depth(0)
                .removed(true)
                .build(),
            CommentRecord::builder()
                .id(5)
                .path("0.4.5")
                .depth(1)
                .child_count(2)
                .creator("carol")
                .text("More below")
                .build(),
        ]
    }

    #[test]
    fn test_text_indents_by_depth() {
        let text = render_text(&result(sample(), UiConfig::default()), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "alice · 3 points #1");
        assert_eq!(lines[1], "  Top-level thoughts");
        assert_eq!(lines[2], "  [missing] #2");
        assert_eq!(lines[3], "    bob · 0 points #3");
    }

    #[test]
    fn test_indent_ignores_bogus_depth() {
        let huge = CommentRecord::builder()
            .id(7)
            .path("0.7")
            .depth(u32::MAX)
            .creator("dave")
            .build();
        let text = render_text(&result(vec![huge], UiConfig::default()), true);
        assert_eq!(text.lines().next(), Some("dave · 0 points #7"));

        let path = (1..=100).map(|id| id.to_string()).collect::<Vec<_>>().join(".");
        let deep = CommentRecord::builder().id(100).path(path).depth(99).build();
        assert_eq!(nesting(&deep), MAX_NESTING);
    }

    #[test]
    fn test_text_shows_tombstone_and_load_more() {
        let text = render_text(&result(sample(), UiConfig::default()), true);
        assert!(text.contains("[removed] #4"));
        assert!(text.contains("    ↳ load 2 more replies"));
        assert!(!text.contains("placeholders"));
    }

    #[test]
    fn test_text_can_hide_placeholders() {
        let ui = UiConfig {
            show_placeholders: false,
            ..UiConfig::default()
        };
        let text = render_text(&result(sample(), ui), true);
        assert!(!text.contains("[missing]"));
        assert!(text.contains("bob"));
    }

    #[test]
    fn test_text_summary_and_diagnostics() {
        let mut comments = sample();
        comments.push(CommentRecord::builder().id(9).path("0.x.9").depth(1).build());
        let text = render_text(&result(comments, UiConfig::default()), false);
        assert!(text.contains("6 comments, 1 placeholder"));
        assert!(text.contains("1 diagnostic"));
        assert!(text.contains("malformed_path"));
    }

    #[test]
    fn test_byline_relative_time() {
        let now = Utc::now();
        let comment = CommentRecord::builder()
            .id(1)
            .path("0.1")
            .depth(0)
            .creator("alice")
            .score(1)
            .published(now - Duration::days(3))
            .build();
        assert_eq!(byline(&comment, now), "alice · 1 point · 3 days ago");
    }

    #[test]
    fn test_markdown_nested_list() {
        let mut out = Vec::new();
        result(sample(), UiConfig::default())
            .render_markdown(&mut out, &ctx(false))
            .unwrap();
        let markdown = String::from_utf8(out).unwrap();
        assert!(markdown.starts_with("## Comments"));
        assert!(markdown.contains("- **alice · 3 points**: Top-level thoughts"));
        assert!(markdown.contains("  - _[missing]_"));
        assert!(markdown.contains("    - _load 2 more replies_"));
    }
}
