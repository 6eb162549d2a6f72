// SPDX-License-Identifier: Apache-2.0

//! "Load more replies" annotation.
//!
//! The API stops descending at a fixed depth. A comment sitting at that depth
//! that still reports replies gets a flag so the UI can offer to fetch its
//! subtree. The check looks at the next record in fetch order, not tree order.

use crate::comment::CommentRecord;

/// Whether a single comment should show the "load more" affordance.
///
/// `next_depth` is the depth of the record that follows it in the flat list.
///
/// # Examples
///
/// ```
/// use twig_core::{CommentRecord, is_load_more_visible};
///
/// let comment = CommentRecord::builder()
///     .id(9)
///     .path("0.1.2.9")
///     .depth(2)
///     .child_count(3)
///     .build();
///
/// assert!(is_load_more_visible(&comment, None, 2));
/// assert!(!is_load_more_visible(&comment, Some(3), 2));
/// assert!(!is_load_more_visible(&comment, None, 6));
/// ```
#[must_use]
pub fn is_load_more_visible(
    comment: &CommentRecord,
    next_depth: Option<u32>,
    max_depth: u32,
) -> bool {
    comment.child_count > 0
        && comment.depth == max_depth
        && next_depth.is_none_or(|next| next <= comment.depth)
}

/// Set `load_more_visible` on every record, in the order they were fetched.
pub fn annotate_load_more(comments: &mut [CommentRecord], max_depth: u32) {
    for i in 0..comments.len() {
        let next_depth = comments.get(i + 1).map(|next| next.depth);
        let visible = is_load_more_visible(&comments[i], next_depth, max_depth);
        comments[i].load_more_visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: i64, depth: u32, child_count: u32) -> CommentRecord {
        CommentRecord::builder()
            .id(id)
            .path(format!("0.{id}"))
            .depth(depth)
            .child_count(child_count)
            .build()
    }

    #[test]
    fn test_last_comment_at_ceiling_with_replies() {
        let mut comments = vec![
            comment(1, 0, 4),
            comment(2, 1, 3),
            comment(3, 2, 2),
            comment(4, 3, 0),
            comment(5, 3, 2),
        ];
        annotate_load_more(&mut comments, 3);

        let flags: Vec<bool> = comments.iter().map(|c| c.load_more_visible).collect();
        assert_eq!(flags, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_next_sibling_at_same_depth_keeps_flag() {
        let mut comments = vec![comment(1, 3, 2), comment(2, 3, 0)];
        annotate_load_more(&mut comments, 3);
        assert!(comments[0].load_more_visible);
        assert!(!comments[1].load_more_visible);
    }

    #[test]
    fn test_deeper_next_record_hides_flag() {
        let mut comments = vec![comment(1, 3, 2), comment(2, 4, 0)];
        annotate_load_more(&mut comments, 3);
        assert!(!comments[0].load_more_visible);
    }

    #[test]
    fn test_below_ceiling_never_flagged() {
        let mut comments = vec![comment(1, 2, 5)];
        annotate_load_more(&mut comments, 3);
        assert!(!comments[0].load_more_visible);
    }

    #[test]
    fn test_stale_flag_is_cleared() {
        let mut stale = comment(1, 3, 0);
        stale.load_more_visible = true;
        let mut comments = vec![stale];
        annotate_load_more(&mut comments, 3);
        assert!(!comments[0].load_more_visible);
    }

    #[test]
    fn test_empty_input() {
        let mut comments: Vec<CommentRecord> = Vec::new();
        annotate_load_more(&mut comments, 3);
        assert!(comments.is_empty());
    }
}
