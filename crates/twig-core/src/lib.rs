// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Twig Core
//!
//! Core library for Twig - threaded comment display from flat, paginated pages.
//!
//! This crate provides reusable components for:
//! - Parsing and validating materialized comment paths
//! - Rebuilding pre-order display order with placeholders for missing ancestors
//! - Flagging comments whose replies must be fetched separately ("load more")
//! - Merging additional pages and spliced reply subtrees
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust
//! use twig_core::{CommentTreeBuilder, parse_comments};
//!
//! # fn main() -> twig_core::Result<()> {
//! let comments = parse_comments(
//!     r#"[
//!         {"id": 3, "path": "0.1.2.3", "depth": 2},
//!         {"id": 1, "path": "0.1", "depth": 0, "childCount": 1}
//!     ]"#,
//! )?;
//!
//! let report = CommentTreeBuilder::default().build_report(comments, None);
//! assert_eq!(report.placeholders, vec![2]);
//! for comment in &report.comments {
//!     println!("{}{}", "  ".repeat(comment.depth as usize), comment.id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`comment`] - Comment records and JSON decoding
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`load_more`] - "Load more replies" annotation
//! - [`merge`] - Page merging and reply splicing
//! - [`path`] - Materialized path parsing
//! - [`tree`] - Tree reconstruction

// ============================================================================
// Error Handling
// ============================================================================

pub use error::TwigError;

/// Convenience Result type for Twig operations.
///
/// This is equivalent to `std::result::Result<T, TwigError>`.
pub type Result<T> = std::result::Result<T, TwigError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, TreeConfig, UiConfig, config_dir, config_file_path, load_config};

// ============================================================================
// Comments
// ============================================================================

pub use comment::{CommentId, CommentRecord, ROOT_SENTINEL, input_schema, parse_comments};
pub use path::{CommentPath, PathError};

// ============================================================================
// Tree Building
// ============================================================================

pub use load_more::{annotate_load_more, is_load_more_visible};
pub use merge::{insert_replies, merge_pages};
pub use tree::{
    CommentTreeBuilder, DEFAULT_MAX_DEPTH, Diagnostic, DiagnosticKind, TreeReport,
    build_comment_tree,
};

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{format_relative_time, single_line, truncate, truncate_with_suffix};

// ============================================================================
// Modules
// ============================================================================

pub mod comment;
pub mod config;
pub mod error;
pub mod load_more;
pub mod merge;
pub mod path;
pub mod tree;
pub mod utils;
