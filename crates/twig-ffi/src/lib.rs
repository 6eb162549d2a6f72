// SPDX-License-Identifier: Apache-2.0

pub mod error;
pub mod types;

use tracing::debug;

use crate::error::TwigFfiError;
use crate::types::{FfiComment, FfiCommentTree};

fn into_records(comments: Vec<FfiComment>) -> Vec<twig_core::CommentRecord> {
    comments.into_iter().map(Into::into).collect()
}

fn into_ffi(comments: Vec<twig_core::CommentRecord>) -> Vec<FfiComment> {
    comments.into_iter().map(FfiComment::from).collect()
}

/// Rebuild display order for a page of comments.
///
/// Called by the comment list after every fetch. Pass `root_id` when showing
/// the replies of a single comment; the comment itself is not returned.
#[uniffi::export]
pub fn build_comment_tree(
    comments: Vec<FfiComment>,
    root_id: Option<i64>,
    max_depth: u32,
) -> FfiCommentTree {
    debug!(count = comments.len(), ?root_id, "building comment tree over FFI");
    twig_core::CommentTreeBuilder::new(max_depth)
        .build_report(into_records(comments), root_id)
        .into()
}

/// Splice a freshly fetched reply subtree under `parent_id`.
///
/// Used when the user taps "load more replies".
#[uniffi::export]
pub fn insert_replies(
    comments: Vec<FfiComment>,
    parent_id: i64,
    replies: Vec<FfiComment>,
    max_depth: u32,
) -> Vec<FfiComment> {
    into_ffi(twig_core::insert_replies(
        into_records(comments),
        parent_id,
        into_records(replies),
        max_depth,
    ))
}

/// Append the next page, skipping comments already present.
#[uniffi::export]
pub fn merge_pages(existing: Vec<FfiComment>, page: Vec<FfiComment>) -> Vec<FfiComment> {
    into_ffi(twig_core::merge_pages(
        into_records(existing),
        into_records(page),
    ))
}

/// Decode a JSON array of comments as returned by the server.
///
/// # Errors
///
/// Returns `TwigFfiError::InvalidInput` if the JSON is not an array of comments.
#[uniffi::export]
pub fn parse_comments_json(json: String) -> Result<Vec<FfiComment>, TwigFfiError> {
    let comments = twig_core::parse_comments(&json)?;
    Ok(into_ffi(comments))
}

/// Depth at which the server stops nesting replies.
#[uniffi::export]
pub fn default_max_depth() -> u32 {
    twig_core::DEFAULT_MAX_DEPTH
}

uniffi::setup_scaffolding!();

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FfiDiagnosticKind;

    fn comment(id: i64, path: &str, depth: u32) -> FfiComment {
        FfiComment {
            id,
            path: path.to_string(),
            depth,
            child_count: 0,
            removed: false,
            deleted: false,
            text: format!("comment {id}"),
            creator: Some("tester".to_string()),
            score: 1,
            published: Some("2024-05-02T08:15:00+00:00".to_string()),
            load_more_visible: false,
            placeholder: false,
        }
    }

    #[test]
    fn test_build_comment_tree_fills_gaps() {
        let tree = build_comment_tree(
            vec![comment(3, "0.1.2.3", 2), comment(1, "0.1", 0)],
            None,
            default_max_depth(),
        );
        let ids: Vec<i64> = tree.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(tree.placeholders, vec![2]);
        assert!(tree.comments[1].placeholder);
        assert!(tree.diagnostics.is_empty());
    }

    #[test]
    fn test_published_round_trips() {
        let tree = build_comment_tree(vec![comment(1, "0.1", 0)], None, 6);
        assert_eq!(
            tree.comments[0].published.as_deref(),
            Some("2024-05-02T08:15:00+00:00")
        );
    }

    #[test]
    fn test_invalid_published_is_dropped() {
        let mut bad = comment(1, "0.1", 0);
        bad.published = Some("yesterday".to_string());
        let tree = build_comment_tree(vec![bad], None, 6);
        assert!(tree.comments[0].published.is_none());
    }

    #[test]
    fn test_diagnostics_cross_boundary() {
        let tree = build_comment_tree(vec![comment(5, "0.5.5", 1)], None, 6);
        assert_eq!(tree.diagnostics.len(), 1);
        assert_eq!(tree.diagnostics[0].kind, FfiDiagnosticKind::SelfReference);
    }

    #[test]
    fn test_insert_replies() {
        let mut parent = comment(1, "0.1", 0);
        parent.child_count = 1;
        parent.load_more_visible = true;
        let merged = insert_replies(vec![parent], 1, vec![comment(2, "0.1.2", 1)], 0);
        let ids: Vec<i64> = merged.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(!merged[0].load_more_visible);
    }

    #[test]
    fn test_merge_pages() {
        let merged = merge_pages(
            vec![comment(1, "0.1", 0)],
            vec![comment(1, "0.1", 0), comment(2, "0.2", 0)],
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_parse_comments_json() {
        let comments =
            parse_comments_json(r#"[{"id": 4, "path": "0.4", "depth": 0}]"#.to_string()).unwrap();
        assert_eq!(comments[0].id, 4);

        let err = parse_comments_json("nope".to_string()).unwrap_err();
        assert!(matches!(err, TwigFfiError::InvalidInput { .. }));
    }
}
