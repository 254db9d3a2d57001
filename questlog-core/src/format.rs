//! Formatting helpers shared by the activity renderer and front ends.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

/// Ellipsis appended by [`truncate_text`]
pub const ELLIPSIS: &str = "...";

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Format a timestamp as short relative time (e.g., "2h"), measured from now.
pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    format_relative_time_at(ts, Utc::now())
}

/// Format a timestamp as short relative time measured from `now`.
///
/// Future timestamps are clamped to "just now".
pub fn format_relative_time_at(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(ts).num_seconds().max(0);
    format_elapsed_secs(secs)
}

/// Bucket a non-negative number of elapsed seconds.
fn format_elapsed_secs(secs: i64) -> String {
    if secs < MINUTE {
        "just now".to_string()
    } else if secs < HOUR {
        format!("{}m", secs / MINUTE)
    } else if secs < DAY {
        format!("{}h", secs / HOUR)
    } else if secs < WEEK {
        format!("{}d", secs / DAY)
    } else if secs < MONTH {
        format!("{}w", secs / WEEK)
    } else if secs < YEAR {
        format!("{}mo", secs / MONTH)
    } else {
        format!("{}y", secs / YEAR)
    }
}

/// Format a count with its noun, e.g. "1 like" or "0 likes".
pub fn format_count(count: i64, singular: &str, plural: &str) -> Result<String> {
    if count < 0 {
        return Err(Error::invalid(format!(
            "count must be non-negative, got {count}"
        )));
    }
    let noun = if count == 1 { singular } else { plural };
    Ok(format!("{} {}", count, noun))
}

/// Collapse every run of whitespace (including newlines) to one space and
/// trim the ends, so the text fits on a single line.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shorten `text` to at most `max_chars` characters followed by [`ELLIPSIS`].
pub fn truncate_text(text: &str, max_chars: usize) -> Result<String> {
    truncate_text_with(text, max_chars, ELLIPSIS)
}

/// Like [`truncate_text`] with a caller-chosen ellipsis marker.
///
/// Lengths are counted in `char`s and the cut lands on an exact char offset,
/// so it can split a word or a multi-codepoint grapheme.
pub fn truncate_text_with(text: &str, max_chars: usize, ellipsis: &str) -> Result<String> {
    if max_chars == 0 {
        return Err(Error::invalid("truncation length must be positive"));
    }
    match text.char_indices().nth(max_chars) {
        None => Ok(text.to_string()),
        Some((idx, _)) => Ok(format!("{}{}", &text[..idx], ellipsis)),
    }
}
