// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use twig_core::{CommentRecord, Diagnostic, DiagnosticKind, TreeReport};

#[derive(Clone, Debug, PartialEq, uniffi::Record, Serialize, Deserialize)]
pub struct FfiComment {
    pub id: i64,
    pub path: String,
    pub depth: u32,
    pub child_count: u32,
    pub removed: bool,
    pub deleted: bool,
    pub text: String,
    pub creator: Option<String>,
    pub score: i64,
    /// RFC 3339 timestamp.
    pub published: Option<String>,
    pub load_more_visible: bool,
    pub placeholder: bool,
}

impl From<CommentRecord> for FfiComment {
    fn from(comment: CommentRecord) -> Self {
        FfiComment {
            id: comment.id,
            path: comment.path,
            depth: comment.depth,
            child_count: comment.child_count,
            removed: comment.removed,
            deleted: comment.deleted,
            text: comment.text,
            creator: comment.creator,
            score: comment.score,
            published: comment.published.map(|dt| dt.to_rfc3339()),
            load_more_visible: comment.load_more_visible,
            placeholder: comment.placeholder,
        }
    }
}

impl From<FfiComment> for CommentRecord {
    /// Unparseable `published` values are dropped rather than rejected.
    fn from(comment: FfiComment) -> Self {
        let published = comment
            .published
            .as_deref()
            .and_then(|raw| raw.parse::<DateTime<Utc>>().ok());

        CommentRecord::builder()
            .id(comment.id)
            .path(comment.path)
            .depth(comment.depth)
            .child_count(comment.child_count)
            .removed(comment.removed)
            .deleted(comment.deleted)
            .text(comment.text)
            .maybe_creator(comment.creator)
            .score(comment.score)
            .maybe_published(published)
            .load_more_visible(comment.load_more_visible)
            .placeholder(comment.placeholder)
            .build()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, uniffi::Enum, Serialize, Deserialize)]
pub enum FfiDiagnosticKind {
    MalformedPath,
    PathIdMismatch,
    SelfReference,
    Cycle,
    DuplicateId,
}

impl From<DiagnosticKind> for FfiDiagnosticKind {
    fn from(kind: DiagnosticKind) -> Self {
        match kind {
            DiagnosticKind::MalformedPath => FfiDiagnosticKind::MalformedPath,
            DiagnosticKind::PathIdMismatch => FfiDiagnosticKind::PathIdMismatch,
            DiagnosticKind::SelfReference => FfiDiagnosticKind::SelfReference,
            DiagnosticKind::Cycle => FfiDiagnosticKind::Cycle,
            DiagnosticKind::DuplicateId => FfiDiagnosticKind::DuplicateId,
        }
    }
}

#[derive(Clone, Debug, uniffi::Record, Serialize, Deserialize)]
pub struct FfiDiagnostic {
    pub comment_id: i64,
    pub kind: FfiDiagnosticKind,
    pub detail: String,
}

impl From<Diagnostic> for FfiDiagnostic {
    fn from(diagnostic: Diagnostic) -> Self {
        FfiDiagnostic {
            comment_id: diagnostic.comment_id,
            kind: diagnostic.kind.into(),
            detail: diagnostic.detail,
        }
    }
}

#[derive(Clone, Debug, uniffi::Record, Serialize, Deserialize)]
pub struct FfiCommentTree {
    pub comments: Vec<FfiComment>,
    pub diagnostics: Vec<FfiDiagnostic>,
    pub placeholders: Vec<i64>,
}

impl From<TreeReport> for FfiCommentTree {
    fn from(report: TreeReport) -> Self {
        FfiCommentTree {
            comments: report.comments.into_iter().map(FfiComment::from).collect(),
            diagnostics: report
                .diagnostics
                .into_iter()
                .map(FfiDiagnostic::from)
                .collect(),
            placeholders: report.placeholders,
        }
    }
}
