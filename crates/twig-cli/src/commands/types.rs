// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Command handlers return data instead of printing directly; the output
//! module decides how to present it.

use serde::Serialize;
use twig_core::{CommentId, Diagnostic, TreeReport, UiConfig};

/// Result from the tree build command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TreeResult {
    /// Input sources in the order they were merged.
    pub sources: Vec<String>,
    /// Root filter that was applied (if any).
    pub root_id: Option<CommentId>,
    /// Depth at which "load more" was flagged.
    pub max_depth: u32,
    /// Comments in display order plus diagnostics.
    #[serde(flatten)]
    pub report: TreeReport,
    /// Display preferences for text and markdown output.
    #[serde(skip)]
    pub ui: UiConfig,
}

/// Result from the tree check command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckResult {
    /// One entry per input file, in argument order.
    pub files: Vec<FileCheck>,
}

impl CheckResult {
    /// Number of files that produced at least one diagnostic.
    pub fn failing_files(&self) -> usize {
        self.files.iter().filter(|f| !f.diagnostics.is_empty()).count()
    }
}

/// Check outcome for a single input file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileCheck {
    /// Input source.
    pub source: String,
    /// Records read from the source.
    pub input: usize,
    /// Records in the built tree, placeholders included.
    pub output: usize,
    /// Ids of synthesized placeholders.
    pub placeholders: Vec<CommentId>,
    /// Data-quality findings.
    pub diagnostics: Vec<Diagnostic>,
}

/// Result from the schema command.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SchemaResult {
    /// JSON schema of the comment input array.
    pub schema: serde_json::Value,
}
