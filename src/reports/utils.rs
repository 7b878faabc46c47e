//! Utility functions for report formatting
//!
//! Provides shared formatting helpers used across all report formatters.

use crate::errors::AppResult;
use serde::Serialize;

/// Format a count with a K/M suffix for table cells
///
/// One decimal place; values below 1,000 are shown as plain integers.
///
/// # Examples
///
/// ```
/// # use wpp_analytics_cli::reports::utils::format_number;
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(1500), "1.5K");
/// assert_eq!(format_number(1_500_000), "1.5M");
/// ```
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Shorten `s` to at most `limit` characters, marking the cut with "..."
///
/// Counts characters, not bytes. A limit below 3 leaves only the ellipsis.
///
/// # Examples
///
/// ```
/// # use wpp_analytics_cli::reports::utils::truncate;
/// assert_eq!(truncate("short", 10), "short");
/// assert_eq!(truncate("this is a very long string", 10), "this is...");
/// ```
pub fn truncate(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        return s.to_string();
    }
    let kept: String = s.chars().take(limit.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}
