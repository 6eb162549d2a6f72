// SPDX-License-Identifier: Apache-2.0

//! Index-addressed storage for comment tree nodes.
//!
//! Nodes live in a `Vec` and refer to each other by [`NodeIndex`], so the
//! parent links are plain indices rather than shared pointers. Insertion order
//! is preserved and doubles as the tie-break order for siblings.

use std::collections::HashMap;

use crate::comment::{CommentId, CommentRecord};
use crate::path::CommentPath;

/// Position of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeIndex(usize);

/// What a node stands for.
#[derive(Debug)]
enum NodeKind {
    /// A comment that was present in the input.
    Actual(CommentRecord),
    /// An ancestor referenced by some path but missing from the input.
    Placeholder {
        id: CommentId,
        path: String,
        depth: u32,
    },
}

impl NodeKind {
    fn id(&self) -> CommentId {
        match self {
            NodeKind::Actual(record) => record.id,
            NodeKind::Placeholder { id, .. } => *id,
        }
    }

    fn into_record(self) -> CommentRecord {
        match self {
            NodeKind::Actual(record) => record,
            NodeKind::Placeholder { id, path, depth } => {
                CommentRecord::placeholder(id, path, depth)
            }
        }
    }
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

/// Outcome of [`CommentArena::upsert_actual`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Upsert {
    /// A new node was created.
    Inserted(NodeIndex),
    /// A placeholder with the same id became an actual node, keeping its links.
    Upgraded(NodeIndex),
    /// An actual node with the same id already exists; the record was dropped.
    Duplicate,
}

#[derive(Debug, Default)]
pub(crate) struct CommentArena {
    nodes: Vec<Node>,
    index: HashMap<CommentId, NodeIndex>,
}

impl CommentArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn get(&self, id: CommentId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub(crate) fn id(&self, idx: NodeIndex) -> CommentId {
        self.nodes[idx.0].kind.id()
    }

    pub(crate) fn path(&self, idx: NodeIndex) -> &str {
        match &self.nodes[idx.0].kind {
            NodeKind::Actual(record) => &record.path,
            NodeKind::Placeholder { path, .. } => path,
        }
    }

    pub(crate) fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.nodes[idx.0].parent
    }

    pub(crate) fn children(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.nodes[idx.0].children
    }

    pub(crate) fn is_placeholder(&self, idx: NodeIndex) -> bool {
        matches!(self.nodes[idx.0].kind, NodeKind::Placeholder { .. })
    }

    fn push(&mut self, kind: NodeKind) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len());
        self.index.insert(kind.id(), idx);
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        idx
    }

    /// Index an input record.
    ///
    /// A placeholder already registered under the same id is upgraded in
    /// place, so nodes attached to it stay attached.
    pub(crate) fn upsert_actual(&mut self, record: CommentRecord) -> Upsert {
        match self.get(record.id) {
            Some(idx) if self.is_placeholder(idx) => {
                self.nodes[idx.0].kind = NodeKind::Actual(record);
                Upsert::Upgraded(idx)
            }
            Some(_) => Upsert::Duplicate,
            None => Upsert::Inserted(self.push(NodeKind::Actual(record))),
        }
    }

    /// Register a stand-in for a missing ancestor.
    pub(crate) fn insert_placeholder(&mut self, path: &CommentPath) -> Option<NodeIndex> {
        let id = path.own_id()?;
        debug_assert!(self.get(id).is_none(), "placeholder {id} already indexed");
        Some(self.push(NodeKind::Placeholder {
            id,
            path: path.to_string(),
            depth: path.depth(),
        }))
    }

    pub(crate) fn attach(&mut self, child: NodeIndex, parent: NodeIndex) {
        debug_assert!(self.nodes[child.0].parent.is_none(), "node linked twice");
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Whether `ancestor` is `node` itself or one of its ancestors.
    pub(crate) fn is_ancestor(&self, ancestor: NodeIndex, node: NodeIndex) -> bool {
        let mut cursor = Some(node);
        let mut steps = 0;
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            // Parent links are acyclic; the bound only protects against a broken arena.
            steps += 1;
            if steps > self.nodes.len() {
                return true;
            }
            cursor = self.nodes[current.0].parent;
        }
        false
    }

    /// Top-level nodes of the forest.
    ///
    /// Without a root id these are the parentless nodes in insertion order;
    /// with one they are the direct children of the node carrying that id, in
    /// the order they were attached.
    pub(crate) fn forest_roots(&self, root_id: Option<CommentId>) -> Vec<NodeIndex> {
        match root_id {
            Some(root) => self
                .get(root)
                .map(|idx| self.children(idx).to_vec())
                .unwrap_or_default(),
            None => (0..self.nodes.len())
                .map(NodeIndex)
                .filter(|&idx| self.parent(idx).is_none())
                .collect(),
        }
    }

    /// Pre-order traversal of the given roots, children in insertion order.
    pub(crate) fn linearize(&self, roots: &[NodeIndex]) -> Vec<NodeIndex> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeIndex> = roots.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            order.push(idx);
            stack.extend(self.children(idx).iter().rev().copied());
        }
        order
    }

    /// Consume the arena, producing records in the given order.
    pub(crate) fn into_records(self, order: &[NodeIndex]) -> Vec<CommentRecord> {
        let mut slots: Vec<Option<NodeKind>> =
            self.nodes.into_iter().map(|node| Some(node.kind)).collect();
        order
            .iter()
            .filter_map(|idx| slots[idx.0].take())
            .map(NodeKind::into_record)
            .collect()
    }
}
