// SPDX-License-Identifier: Apache-2.0

//! Comment records exchanged with the comment-listing layer.

use bon::Builder;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TwigError;

/// Comment identifier as assigned by the server.
pub type CommentId = i64;

/// Leading path segment that anchors top-level comments.
pub const ROOT_SENTINEL: CommentId = 0;

/// A single comment as fetched from the server.
///
/// Input records come straight from the API; `load_more_visible` and
/// `placeholder` are output-only and are recomputed by the tree builder.
///
/// # Examples
///
/// ```
/// use twig_core::CommentRecord;
///
/// let comment = CommentRecord::builder()
///     .id(47)
///     .path("0.12.47")
///     .depth(1)
///     .text("Agreed")
///     .build();
/// assert_eq!(comment.child_count, 0);
/// assert!(!comment.is_tombstone());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Builder)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    /// Unique comment id.
    pub id: CommentId,
    /// Dot-separated ancestor ids ending with this comment's id.
    #[builder(into)]
    pub path: String,
    /// Nesting depth, 0 for top-level comments.
    pub depth: u32,
    /// Number of replies reported by the server.
    #[serde(default)]
    #[builder(default)]
    pub child_count: u32,
    /// Removed by a moderator.
    #[serde(default)]
    #[builder(default)]
    pub removed: bool,
    /// Deleted by its author.
    #[serde(default)]
    #[builder(default)]
    pub deleted: bool,
    /// Markdown body.
    #[serde(default)]
    #[builder(default, into)]
    pub text: String,
    /// Display name of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub creator: Option<String>,
    /// Net vote score.
    #[serde(default)]
    #[builder(default)]
    pub score: i64,
    /// Publication time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<DateTime<Utc>>,
    /// Whether a "load more replies" affordance should follow this comment.
    #[serde(default)]
    #[builder(default)]
    pub load_more_visible: bool,
    /// Synthesized stand-in for an ancestor missing from the fetched page.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    #[builder(default)]
    pub placeholder: bool,
}

impl CommentRecord {
    /// Tombstone standing in for an ancestor that was never fetched.
    pub(crate) fn placeholder(id: CommentId, path: String, depth: u32) -> Self {
        Self {
            id,
            path,
            depth,
            child_count: 0,
            removed: true,
            deleted: false,
            text: String::new(),
            creator: None,
            score: 0,
            published: None,
            load_more_visible: false,
            placeholder: true,
        }
    }

    /// Whether the body should be hidden behind a tombstone.
    #[must_use]
    pub fn is_tombstone(&self) -> bool {
        self.removed || self.deleted || self.placeholder
    }
}

/// Decode a JSON array of comment records.
///
/// # Errors
///
/// Returns `TwigError::InvalidInput` if the JSON is not an array of records.
pub fn parse_comments(json: &str) -> Result<Vec<CommentRecord>, TwigError> {
    serde_json::from_str(json).map_err(TwigError::InvalidInput)
}

/// JSON schema of the input format, an array of comment records.
#[must_use]
pub fn input_schema() -> serde_json::Value {
    schemars::schema_for!(Vec<CommentRecord>).to_value()
}
