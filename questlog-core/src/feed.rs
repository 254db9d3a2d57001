//! Feed rendering
//!
//! Renders a list of activity records newest first. Each record is rendered
//! on its own: a malformed or unsupported record becomes a [`FeedFailure`]
//! and the rest of the feed still renders.

use crate::activity::{ActivityRenderer, RichActivity};
use crate::error::{Error, Result};
use crate::format::format_count;
use crate::types::{ActivityKind, ActivityRecord};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Feed-level options
#[derive(Debug, Clone, Default)]
pub struct FeedOptions {
    /// Only render these kinds; empty means all
    pub kinds: Vec<ActivityKind>,
    /// Render unsupported kinds as "did something" instead of failing them
    pub fallback_unsupported: bool,
}

/// A successfully rendered feed item
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub activity_id: String,
    pub timestamp: DateTime<Utc>,
    pub rich: RichActivity,
}

impl FeedEntry {
    pub fn text(&self) -> String {
        self.rich.plain_text()
    }
}

/// A feed item that could not be rendered
#[derive(Debug)]
pub struct FeedFailure {
    pub activity_id: String,
    pub error: Error,
}

/// Result of rendering a whole feed
#[derive(Debug, Default)]
pub struct FeedRender {
    pub entries: Vec<FeedEntry>,
    pub failures: Vec<FeedFailure>,
    /// Records left out by the kind filter
    pub filtered: usize,
}

impl FeedRender {
    /// Short human summary, e.g. "3 activities, 1 skipped"
    pub fn summary(&self) -> Result<String> {
        let mut summary = format_count(
            count(self.entries.len())?,
            "activity",
            "activities",
        )?;
        if !self.failures.is_empty() {
            summary.push_str(&format!(", {} skipped", self.failures.len()));
        }
        if self.filtered > 0 {
            summary.push_str(&format!(", {} filtered", self.filtered));
        }
        Ok(summary)
    }
}

/// Parse a feed from a JSON array of activity records
pub fn parse_feed(json: &str) -> Result<Vec<ActivityRecord>> {
    let records: Vec<ActivityRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// Read and parse a feed file
pub fn load_feed(path: &Path) -> Result<Vec<ActivityRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_feed(&content)?;
    tracing::debug!(path = %path.display(), count = records.len(), "feed loaded");
    Ok(records)
}

fn count(n: usize) -> Result<i64> {
    i64::try_from(n).map_err(|_| Error::invalid(format!("count {n} out of range")))
}

/// Render `records` newest first, isolating failures per record.
pub fn render_feed(
    renderer: &ActivityRenderer,
    records: &[ActivityRecord],
    viewer_id: Option<&str>,
    now: DateTime<Utc>,
    options: &FeedOptions,
) -> FeedRender {
    let mut ordered: Vec<&ActivityRecord> = records.iter().collect();
    // Stable sort keeps backend order for equal timestamps
    ordered.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut out = FeedRender::default();
    for record in ordered {
        if !options.kinds.is_empty() && !options.kinds.contains(&record.kind) {
            out.filtered += 1;
            continue;
        }

        let rendered = match renderer.render_rich(record, viewer_id, now) {
            Err(Error::UnsupportedActivityType(kind)) if options.fallback_unsupported => {
                tracing::debug!(activity_id = %record.id, %kind, "using fallback sentence");
                renderer.render_fallback(record, viewer_id, now)
            }
            other => other,
        };

        match rendered {
            Ok(rich) => out.entries.push(FeedEntry {
                activity_id: record.id.clone(),
                timestamp: record.timestamp,
                rich,
            }),
            Err(error) => {
                tracing::warn!(activity_id = %record.id, error = %error, "skipping activity");
                out.failures.push(FeedFailure {
                    activity_id: record.id.clone(),
                    error,
                });
            }
        }
    }

    tracing::debug!(
        rendered = out.entries.len(),
        failed = out.failures.len(),
        filtered = out.filtered,
        "feed rendered"
    );
    out
}
