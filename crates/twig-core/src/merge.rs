// SPDX-License-Identifier: Apache-2.0

//! Combining comment pages and spliced reply subtrees.

use std::collections::HashSet;

use tracing::debug;

use crate::comment::{CommentId, CommentRecord};
use crate::tree::CommentTreeBuilder;

/// Append a freshly fetched page, skipping ids already present in `existing`.
///
/// Pages can overlap when new comments shift the server-side cursor, so the
/// same comment may arrive twice. The earlier copy wins. Repeats inside
/// `page` itself are kept so the tree builder reports them.
#[must_use]
pub fn merge_pages(
    mut existing: Vec<CommentRecord>,
    page: impl IntoIterator<Item = CommentRecord>,
) -> Vec<CommentRecord> {
    let seen: HashSet<CommentId> = existing.iter().map(|c| c.id).collect();
    let before = existing.len();
    existing.extend(page.into_iter().filter(|c| !seen.contains(&c.id)));
    debug!(added = existing.len() - before, "merged comment page");
    existing
}

/// Replace the replies shown under `parent_id` with a newly fetched subtree.
///
/// `list` must already be in display order. The parent's current descendants
/// (the run after it with greater depth) are swapped for `replies` rebuilt with
/// `parent_id` as root, and the parent's "load more" flag is cleared. If the
/// parent is not in `list`, it is returned unchanged.
///
/// # Examples
///
/// ```
/// use twig_core::{CommentRecord, insert_replies};
///
/// let list = vec![
///     CommentRecord::builder().id(1).path("0.1").depth(0).child_count(1).load_more_visible(true).build(),
///     CommentRecord::builder().id(9).path("0.9").depth(0).build(),
/// ];
/// let replies = vec![
///     CommentRecord::builder().id(2).path("0.1.2").depth(1).build(),
/// ];
///
/// let merged = insert_replies(list, 1, replies, 6);
/// let ids: Vec<i64> = merged.iter().map(|c| c.id).collect();
/// assert_eq!(ids, vec![1, 2, 9]);
/// assert!(!merged[0].load_more_visible);
/// ```
#[must_use]
pub fn insert_replies(
    mut list: Vec<CommentRecord>,
    parent_id: CommentId,
    replies: Vec<CommentRecord>,
    max_depth: u32,
) -> Vec<CommentRecord> {
    let Some(pos) = list.iter().position(|c| c.id == parent_id) else {
        debug!(parent_id, "parent not in list, replies dropped");
        return list;
    };

    let parent_depth = list[pos].depth;
    let end = list[pos + 1..]
        .iter()
        .position(|c| c.depth <= parent_depth)
        .map_or(list.len(), |offset| pos + 1 + offset);

    let subtree = CommentTreeBuilder::new(max_depth).build(replies, Some(parent_id));
    debug!(
        parent_id,
        replaced = end - pos - 1,
        inserted = subtree.len(),
        "spliced replies"
    );

    list[pos].load_more_visible = false;
    list.splice(pos + 1..end, subtree);
    list
}
