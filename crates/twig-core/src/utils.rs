// SPDX-License-Identifier: Apache-2.0

//! Text utility functions for Twig.
//!
//! Formatting helpers shared by the CLI and FFI renderers.

use chrono::{DateTime, Utc};

/// Truncates text to a maximum length with a custom suffix.
///
/// Uses character count (not byte count) to safely handle multi-byte UTF-8.
/// The suffix is included in the max length calculation.
///
/// # Examples
///
/// ```
/// use twig_core::utils::truncate_with_suffix;
///
/// let text = "This is a very long comment that needs truncation";
/// let result = truncate_with_suffix(text, 20, " [more]");
/// assert!(result.ends_with(" [more]"));
/// assert!(result.chars().count() <= 20);
/// ```
#[must_use]
pub fn truncate_with_suffix(text: &str, max_len: usize, suffix: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        text.to_string()
    } else {
        let suffix_len = suffix.chars().count();
        let truncate_at = max_len.saturating_sub(suffix_len);
        let truncated: String = text.chars().take(truncate_at).collect();
        format!("{truncated}{suffix}")
    }
}

/// Truncates text to a maximum length with default ellipsis suffix "...".
///
/// # Examples
///
/// ```
/// use twig_core::utils::truncate;
///
/// assert_eq!(truncate("Hello", 10), "Hello");
/// assert_eq!(truncate("Hello, world", 8), "Hello...");
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    truncate_with_suffix(text, max_len, "...")
}

/// Collapses a comment body onto a single line.
///
/// Runs of whitespace, newlines included, become one space.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Formats `dt` relative to `now` (e.g., "3 days ago").
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use twig_core::utils::format_relative_time;
///
/// let now = Utc::now();
/// assert_eq!(format_relative_time(&now, now), "just now");
/// assert_eq!(format_relative_time(&(now - Duration::days(1)), now), "1 day ago");
/// ```
#[must_use]
pub fn format_relative_time(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*dt);

    let (value, unit) = if duration.num_days() > 365 {
        (duration.num_days() / 365, "year")
    } else if duration.num_days() > 30 {
        (duration.num_days() / 30, "month")
    } else if duration.num_days() > 0 {
        (duration.num_days(), "day")
    } else if duration.num_hours() > 0 {
        (duration.num_hours(), "hour")
    } else if duration.num_minutes() > 0 {
        (duration.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if value == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{value} {unit}s ago")
    }
}
