//! Display helpers shared by the page renderers.

use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};

const DATE_FORMAT: &str = "%b %-d, %Y";

/// Compacts a view count: `1500` -> `"1.5K"`, `2_300_000` -> `"2.3M"`.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

/// Formats a timestamp as `"May 15, 2024"` (UTC calendar date).
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses an RFC 3339 timestamp and formats it like [`format_date`].
#[track_caller]
pub fn format_date_str(value: &str) -> CoreErrorResult<String> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map_err(|e| CoreError::invalid_timestamp(value, e))?;
    Ok(format_date(&parsed.with_timezone(&Utc)))
}

/// Formats seconds as `MM:SS`, or `H:MM:SS` once the duration reaches an hour.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let remaining = seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{remaining:02}")
    } else {
        format!("{minutes:02}:{remaining:02}")
    }
}
