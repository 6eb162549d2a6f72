// SPDX-License-Identifier: Apache-2.0

//! Tree build and check commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;
use twig_core::{
    AppConfig, CommentId, CommentRecord, CommentTreeBuilder, TwigError, merge_pages,
    parse_comments,
};

use super::types::{CheckResult, FileCheck, TreeResult};

/// Display name for an input source.
fn source_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read one comment page from a file, or stdin for `-`.
fn read_page(path: &Path) -> Result<Vec<CommentRecord>> {
    let name = source_name(path);
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(TwigError::from)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .map_err(TwigError::from)
            .with_context(|| format!("Failed to read {name}"))?
    };

    let page = parse_comments(&json).with_context(|| format!("Failed to parse {name}"))?;
    debug!(source = %name, comments = page.len(), "read comment page");
    Ok(page)
}

fn builder_for(config: &AppConfig, max_depth: Option<u32>) -> CommentTreeBuilder {
    match max_depth {
        Some(depth) => CommentTreeBuilder::new(depth),
        None => CommentTreeBuilder::from_config(&config.tree),
    }
}

/// Merge the given pages in order and build one tree.
pub fn run_build(
    files: &[PathBuf],
    root_id: Option<CommentId>,
    max_depth: Option<u32>,
    config: &AppConfig,
) -> Result<TreeResult> {
    let mut comments = Vec::new();
    for path in files {
        comments = merge_pages(comments, read_page(path)?);
    }

    let builder = builder_for(config, max_depth);
    let report = builder.build_report(comments, root_id);

    Ok(TreeResult {
        sources: files.iter().map(|p| source_name(p)).collect(),
        root_id,
        max_depth: builder.max_depth(),
        report,
        ui: config.ui.clone(),
    })
}

/// Build every page independently and collect their diagnostics.
pub fn run_check(
    files: &[PathBuf],
    max_depth: Option<u32>,
    config: &AppConfig,
) -> Result<CheckResult> {
    let builder = builder_for(config, max_depth);

    let files = files
        .par_iter()
        .map(|path| -> Result<FileCheck> {
            let page = read_page(path)?;
            let input = page.len();
            let report = builder.build_report(page, None);
            Ok(FileCheck {
                source: source_name(path),
                input,
                output: report.comments.len(),
                placeholders: report.placeholders,
                diagnostics: report.diagnostics,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CheckResult { files })
}
