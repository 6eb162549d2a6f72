// SPDX-License-Identifier: Apache-2.0

//! Materialized comment paths.
//!
//! Every comment carries its full ancestry as a dot-separated list of ids,
//! ending with its own id, e.g. `"0.12.47.103"`. A leading `0` is the root
//! sentinel and is not a comment: `"0.5"` and `"5"` both describe a top-level
//! comment with id 5.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::comment::{CommentId, ROOT_SENTINEL};

/// Reasons a path string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path contains no comment ids.
    #[error("path contains no comment ids")]
    Empty,

    /// A segment is not a positive integer id.
    #[error("path segment `{segment}` is not a comment id")]
    InvalidSegment {
        /// The offending segment.
        segment: String,
    },
}

/// A parsed comment path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPath {
    rooted: bool,
    ids: Vec<CommentId>,
}

impl CommentPath {
    /// Parse a dot-separated path.
    ///
    /// # Examples
    ///
    /// ```
    /// use twig_core::CommentPath;
    ///
    /// let path = CommentPath::parse("0.12.47").unwrap();
    /// assert_eq!(path.ids(), &[12, 47]);
    /// assert_eq!(path.parent_id(), Some(12));
    /// assert_eq!(path.to_string(), "0.12.47");
    ///
    /// assert!(CommentPath::parse("0.x.47").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PathError::Empty);
        }

        let mut segments = raw.split('.').peekable();
        let rooted = segments.peek().is_some_and(|s| s.trim() == "0");
        if rooted {
            segments.next();
        }

        let ids = segments
            .map(|segment| match segment.trim().parse::<CommentId>() {
                Ok(id) if id > ROOT_SENTINEL => Ok(id),
                _ => Err(PathError::InvalidSegment {
                    segment: segment.to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Err(PathError::Empty);
        }

        Ok(Self { rooted, ids })
    }

    /// Ancestor ids followed by the comment's own id, without the sentinel.
    #[must_use]
    pub fn ids(&self) -> &[CommentId] {
        &self.ids
    }

    /// The id the path ends with.
    #[must_use]
    pub fn own_id(&self) -> Option<CommentId> {
        self.ids.last().copied()
    }

    /// The direct parent id, or `None` for a top-level comment.
    #[must_use]
    pub fn parent_id(&self) -> Option<CommentId> {
        self.ids.len().checked_sub(2).map(|i| self.ids[i])
    }

    /// The path of the direct parent, keeping the sentinel prefix if present.
    #[must_use]
    pub fn parent(&self) -> Option<CommentPath> {
        if self.ids.len() < 2 {
            return None;
        }
        Some(Self {
            rooted: self.rooted,
            ids: self.ids[..self.ids.len() - 1].to_vec(),
        })
    }

    /// String form of the parent path, e.g. `"0.12"` for `"0.12.47"`.
    #[must_use]
    pub fn parent_path(&self) -> Option<String> {
        self.parent().map(|parent| parent.to_string())
    }

    /// Nesting depth implied by the path (0 for top-level).
    #[must_use]
    pub fn depth(&self) -> u32 {
        u32::try_from(self.ids.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Whether the path describes a top-level comment.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.ids.len() == 1
    }
}

impl fmt::Display for CommentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if self.rooted {
            write!(f, "{ROOT_SENTINEL}")?;
            first = false;
        }
        for id in &self.ids {
            if first {
                write!(f, "{id}")?;
                first = false;
            } else {
                write!(f, ".{id}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CommentPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rooted_path() {
        let path = CommentPath::parse("0.12.47.103").unwrap();
        assert_eq!(path.ids(), &[12, 47, 103]);
        assert_eq!(path.own_id(), Some(103));
        assert_eq!(path.parent_id(), Some(47));
        assert_eq!(path.depth(), 2);
        assert!(!path.is_top_level());
    }

    #[test]
    fn test_parse_unrooted_path() {
        let path = CommentPath::parse("1.2.3").unwrap();
        assert_eq!(path.ids(), &[1, 2, 3]);
        assert_eq!(path.to_string(), "1.2.3");
    }

    #[test]
    fn test_top_level_has_no_parent() {
        for raw in ["5", "0.5"] {
            let path = CommentPath::parse(raw).unwrap();
            assert!(path.is_top_level(), "{raw} should be top-level");
            assert_eq!(path.parent_id(), None);
            assert!(path.parent().is_none());
            assert_eq!(path.depth(), 0);
        }
    }

    #[test]
    fn test_parent_keeps_sentinel() {
        let path = CommentPath::parse("0.1.2.3").unwrap();
        let parent = path.parent().unwrap();
        assert_eq!(parent.to_string(), "0.1.2");
        assert_eq!(parent.own_id(), Some(2));

        assert_eq!(path.parent_path().as_deref(), Some("0.1.2"));

        let grandparent = parent.parent().unwrap();
        assert_eq!(grandparent.to_string(), "0.1");
        assert!(grandparent.parent().is_none());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(CommentPath::parse(""), Err(PathError::Empty));
        assert_eq!(CommentPath::parse("   "), Err(PathError::Empty));
        assert_eq!(CommentPath::parse("0"), Err(PathError::Empty));
    }

    #[test]
    fn test_non_numeric_segment_rejected() {
        assert_eq!(
            CommentPath::parse("0.12.abc"),
            Err(PathError::InvalidSegment {
                segment: "abc".to_string()
            })
        );
        assert_eq!(
            CommentPath::parse("1..2"),
            Err(PathError::InvalidSegment {
                segment: String::new()
            })
        );
    }

    #[test]
    fn test_negative_segment_rejected() {
        assert_eq!(
            CommentPath::parse("0.-5"),
            Err(PathError::InvalidSegment {
                segment: "-5".to_string()
            })
        );
        assert!(CommentPath::parse("-5").is_err());
    }

    #[test]
    fn test_sentinel_only_allowed_first() {
        assert!(matches!(
            CommentPath::parse("1.0.2"),
            Err(PathError::InvalidSegment { .. })
        ));
    }

    #[test]
    fn test_from_str() {
        let path: CommentPath = "0.9".parse().unwrap();
        assert_eq!(path.own_id(), Some(9));
    }
}
