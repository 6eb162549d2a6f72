// SPDX-License-Identifier: Apache-2.0

//! Data-quality findings reported while building a tree.

use std::fmt;

use serde::Serialize;

use crate::comment::CommentId;

/// Category of a data-quality problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The path is empty or has a segment that is not a comment id.
    MalformedPath,
    /// The path does not end with the record's own id.
    PathIdMismatch,
    /// The path names the comment as its own parent.
    SelfReference,
    /// Linking the comment would make it its own ancestor.
    Cycle,
    /// Another record with the same id was already indexed.
    DuplicateId,
}

impl DiagnosticKind {
    /// Stable snake-case name, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticKind::MalformedPath => "malformed_path",
            DiagnosticKind::PathIdMismatch => "path_id_mismatch",
            DiagnosticKind::SelfReference => "self_reference",
            DiagnosticKind::Cycle => "cycle",
            DiagnosticKind::DuplicateId => "duplicate_id",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found in one input record.
///
/// The record is still placed in the output (at top level) unless it was a
/// duplicate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Id of the offending record.
    pub comment_id: CommentId,
    /// Category.
    pub kind: DiagnosticKind,
    /// Human-readable explanation.
    pub detail: String,
}

impl Diagnostic {
    pub(crate) fn new(
        comment_id: CommentId,
        kind: DiagnosticKind,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            comment_id,
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "comment {}: {} ({})", self.comment_id, self.detail, self.kind)
    }
}
