//! # questlog-core
//!
//! Core library for questlog - activity feeds for a video game catalogue.
//!
//! This library provides:
//! - Domain types for activity records
//! - Relative-time, count and truncation formatting
//! - Activity rendering as rich segments or plain text
//! - Feed rendering with per-item failure isolation
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use questlog_core::{render_text, ActivityKind, ActivityRecord, Actor, Game};
//!
//! let now = Utc::now();
//! let record = ActivityRecord {
//!     id: "a1".into(),
//!     kind: ActivityKind::Review,
//!     timestamp: now - Duration::hours(2),
//!     actor: Actor { id: "u1".into(), username: "GamerPro".into(), avatar_url: None },
//!     target: None,
//!     game: Some(Game { id: "g1".into(), name: "Elden Ring".into(), cover_url: None }),
//!     content: Some("An absolute masterpiece".into()),
//! };
//!
//! let text = render_text(&record, None, now).unwrap();
//! assert_eq!(text, "GamerPro reviewed Elden Ring: \"An absolute masterpiece\" · 2h");
//! ```

// Re-export commonly used items at the crate root
pub use activity::{
    render_rich, render_text, ActivityRenderer, LinkResolver, LinkedSpan, PathLinks,
    RenderOptions, RichActivity, Segment,
};
pub use config::Config;
pub use error::{Error, Result};
pub use feed::{
    load_feed, parse_feed, render_feed, FeedEntry, FeedFailure, FeedOptions, FeedRender,
};
pub use format::{
    collapse_whitespace, format_count, format_relative_time, format_relative_time_at, truncate_text,
    truncate_text_with,
};
pub use types::*;

// Public modules
pub mod activity;
pub mod config;
pub mod error;
pub mod feed;
pub mod format;
pub mod logging;
pub mod types;
