// SPDX-License-Identifier: Apache-2.0

//! Comment tree reconstruction.
//!
//! Turns a flat, paginated list of comments into display order: every comment
//! is followed by its replies (pre-order), and ancestors missing from the
//! fetched pages are filled in with tombstone placeholders so the thread stays
//! connected.
//!
//! The build runs in three steps over call-local state:
//!
//! 1. index every record by id in an arena of nodes,
//! 2. link each record to its parent, creating placeholder chains upward for
//!    ancestors that were not fetched,
//! 3. walk the resulting forest depth-first and emit records.
//!
//! The "load more" flag is computed beforehand over the original fetch order.

mod arena;
mod diagnostic;

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::comment::{CommentId, CommentRecord};
use crate::config::TreeConfig;
use crate::load_more::annotate_load_more;
use crate::path::CommentPath;

use arena::{CommentArena, NodeIndex, Upsert};
pub use diagnostic::{Diagnostic, DiagnosticKind};

/// Deepest level the comment API returns before replies must be fetched separately.
pub const DEFAULT_MAX_DEPTH: u32 = 6;

/// Result of a build, including what was synthesized and what looked wrong.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeReport {
    /// Comments in display order, placeholders included.
    pub comments: Vec<CommentRecord>,
    /// Data-quality findings: duplicate ids first, then linking problems,
    /// each group in input order.
    pub diagnostics: Vec<Diagnostic>,
    /// Ids of the placeholders present in `comments`, in display order.
    pub placeholders: Vec<CommentId>,
}

impl TreeReport {
    /// Whether the input produced no diagnostics.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Rebuilds nested comment order from flat comment lists.
///
/// The builder holds only configuration, so one instance can be shared and
/// used from several threads at once.
///
/// # Examples
///
/// ```
/// use twig_core::{CommentRecord, CommentTreeBuilder};
///
/// let comments = vec![
///     CommentRecord::builder().id(3).path("0.1.2.3").depth(2).build(),
///     CommentRecord::builder().id(1).path("0.1").depth(0).build(),
/// ];
///
/// let tree = CommentTreeBuilder::new(6).build(comments, None);
/// let ids: Vec<i64> = tree.iter().map(|c| c.id).collect();
/// assert_eq!(ids, vec![1, 2, 3]);
/// assert!(tree[1].placeholder);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentTreeBuilder {
    max_depth: u32,
}

impl Default for CommentTreeBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl CommentTreeBuilder {
    /// Create a builder flagging "load more" at `max_depth`.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    /// Create a builder from the `[tree]` configuration section.
    #[must_use]
    pub fn from_config(config: &TreeConfig) -> Self {
        Self::new(config.max_depth)
    }

    /// Depth at which the "load more" flag is considered.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Build display order, discarding diagnostics.
    ///
    /// With `root_id`, only the descendants of that comment are returned; the
    /// comment itself is left out since the caller already shows it.
    #[must_use]
    pub fn build(
        &self,
        comments: Vec<CommentRecord>,
        root_id: Option<CommentId>,
    ) -> Vec<CommentRecord> {
        self.build_report(comments, root_id).comments
    }

    /// Build display order and report placeholders and data-quality findings.
    #[instrument(skip_all, fields(input = comments.len(), root_id = ?root_id))]
    #[must_use]
    pub fn build_report(
        &self,
        mut comments: Vec<CommentRecord>,
        root_id: Option<CommentId>,
    ) -> TreeReport {
        let input_len = comments.len();
        annotate_load_more(&mut comments, self.max_depth);

        let mut diagnostics = Vec::new();
        let mut arena = CommentArena::with_capacity(input_len);
        let mut actual = Vec::with_capacity(input_len);

        for record in comments {
            let id = record.id;
            match arena.upsert_actual(record) {
                Upsert::Inserted(idx) | Upsert::Upgraded(idx) => actual.push(idx),
                Upsert::Duplicate => diagnostics.push(Diagnostic::new(
                    id,
                    DiagnosticKind::DuplicateId,
                    "duplicate comment id, keeping the first occurrence",
                )),
            }
        }
        debug!(indexed = arena.len(), "indexed comments");

        for idx in actual {
            if let Err(diagnostic) = link(&mut arena, idx, root_id) {
                diagnostics.push(diagnostic);
            }
        }
        debug!(nodes = arena.len(), "linked comments");

        let roots = arena.forest_roots(root_id);
        let order = arena.linearize(&roots);
        let placeholders: Vec<CommentId> = order
            .iter()
            .filter(|&&idx| arena.is_placeholder(idx))
            .map(|&idx| arena.id(idx))
            .collect();
        let comments = arena.into_records(&order);

        for diagnostic in &diagnostics {
            warn!(
                comment_id = diagnostic.comment_id,
                kind = %diagnostic.kind,
                "{}",
                diagnostic.detail
            );
        }
        info!(
            input = input_len,
            output = comments.len(),
            placeholders = placeholders.len(),
            diagnostics = diagnostics.len(),
            "comment tree built"
        );

        TreeReport {
            comments,
            diagnostics,
            placeholders,
        }
    }
}

/// Build display order with a one-off builder.
#[must_use]
pub fn build_comment_tree(
    comments: Vec<CommentRecord>,
    root_id: Option<CommentId>,
    max_depth: u32,
) -> Vec<CommentRecord> {
    CommentTreeBuilder::new(max_depth).build(comments, root_id)
}

/// Attach an input record to its parent, synthesizing missing ancestors.
///
/// The path is checked in full before the arena is touched: the walk first
/// finds the nearest ancestor that is already indexed, then creates
/// placeholders for every id in between. On error nothing is linked and the
/// record ends up at top level.
fn link(
    arena: &mut CommentArena,
    idx: NodeIndex,
    root_id: Option<CommentId>,
) -> Result<(), Diagnostic> {
    let id = arena.id(idx);
    if root_id == Some(id) {
        return Ok(());
    }

    let path = CommentPath::parse(arena.path(idx))
        .map_err(|e| Diagnostic::new(id, DiagnosticKind::MalformedPath, e.to_string()))?;
    if path.own_id() != Some(id) {
        return Err(Diagnostic::new(
            id,
            DiagnosticKind::PathIdMismatch,
            format!("path `{path}` does not end with the comment id"),
        ));
    }
    check_repeated_ids(&path, id)?;

    let ids = path.ids();
    let mut missing = 0;
    let mut anchor = None;
    for &ancestor in ids[..ids.len() - 1].iter().rev() {
        if let Some(existing) = arena.get(ancestor) {
            anchor = Some(existing);
            break;
        }
        missing += 1;
        if root_id == Some(ancestor) {
            break;
        }
    }

    if let Some(anchor) = anchor
        && arena.is_ancestor(idx, anchor)
    {
        return Err(Diagnostic::new(
            id,
            DiagnosticKind::Cycle,
            format!(
                "attaching comment {id} under {} would form a cycle",
                arena.id(anchor)
            ),
        ));
    }

    let mut current = idx;
    let mut parent_path = path.parent();
    for _ in 0..missing {
        let Some(placeholder_path) = parent_path else {
            break;
        };
        let Some(placeholder) = arena.insert_placeholder(&placeholder_path) else {
            break;
        };
        debug!(
            placeholder = arena.id(placeholder),
            child = arena.id(current),
            "synthesized missing ancestor"
        );
        arena.attach(current, placeholder);
        current = placeholder;
        parent_path = placeholder_path.parent();
    }
    if let Some(anchor) = anchor {
        arena.attach(current, anchor);
    }
    Ok(())
}

/// Reject paths that list the same comment twice.
fn check_repeated_ids(path: &CommentPath, id: CommentId) -> Result<(), Diagnostic> {
    let ids = path.ids();
    let mut seen = HashSet::with_capacity(ids.len());
    for (pos, &segment) in ids.iter().enumerate() {
        if seen.insert(segment) {
            continue;
        }
        return Err(if ids[pos - 1] == segment {
            Diagnostic::new(
                id,
                DiagnosticKind::SelfReference,
                format!("path `{path}` names comment {segment} as its own parent"),
            )
        } else {
            Diagnostic::new(
                id,
                DiagnosticKind::Cycle,
                format!("path `{path}` passes through comment {segment} twice"),
            )
        });
    }
    Ok(())
}
