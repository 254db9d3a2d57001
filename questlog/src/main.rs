//! questlog-feed - render an activity feed from a JSON file
//!
//! Reads a JSON array of activity records and prints one sentence per
//! activity, newest first. Records that cannot be rendered are reported on
//! stderr and do not stop the rest of the feed.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Logs: $XDG_STATE_HOME/questlog/questlog.log (~/.local/state/questlog/questlog.log)
//! - Config: $XDG_CONFIG_HOME/questlog/config.toml (~/.config/questlog/config.toml)

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use questlog_core::feed::{load_feed, parse_feed, render_feed, FeedOptions, FeedRender};
use questlog_core::{ActivityKind, ActivityRecord, ActivityRenderer, Config, PathLinks};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "questlog-feed")]
#[command(about = "Render a video game activity feed")]
#[command(version)]
struct Args {
    /// Feed file (JSON array of activities), or `-` for stdin
    feed: PathBuf,

    /// Id of the viewing user; their own activities read "You ..."
    #[arg(long)]
    viewer: Option<String>,

    /// Reference time for relative timestamps (RFC 3339, default: now)
    #[arg(long)]
    now: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Only render these activity types (repeatable)
    #[arg(long = "kind", value_parser = parse_kind)]
    kinds: Vec<ActivityKind>,

    /// Render unsupported activity types as "did something"
    #[arg(long)]
    fallback: bool,

    /// Config file (default: $XDG_CONFIG_HOME/questlog/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain sentences
    Text,
    /// Markdown with links to profiles, games, reviews and comments
    Md,
    /// One JSON object per line with linked spans
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    id: &'a str,
    timestamp: DateTime<Utc>,
    text: String,
    spans: Vec<questlog_core::LinkedSpan>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let log_guard =
        questlog_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!(feed = %args.feed.display(), "questlog-feed starting");

    let now = parse_now(args.now.as_deref())?;
    let records = read_feed(&args.feed)?;

    let renderer = ActivityRenderer::new(config.format.render_options())
        .context("invalid format configuration")?;
    let options = FeedOptions {
        kinds: args.kinds.clone(),
        fallback_unsupported: args.fallback,
    };

    let feed = render_feed(&renderer, &records, args.viewer.as_deref(), now, &options);
    print_feed(&feed, args.format)?;

    for failure in &feed.failures {
        eprintln!("skipped {}: {}", failure.activity_id, failure.error);
    }
    if !feed.failures.is_empty() {
        eprintln!("details logged under {}", log_guard.log_dir().display());
    }
    eprintln!("{}", feed.summary()?);

    tracing::info!(
        rendered = feed.entries.len(),
        skipped = feed.failures.len(),
        "questlog-feed done"
    );
    Ok(())
}

fn parse_kind(s: &str) -> std::result::Result<ActivityKind, String> {
    let kind = ActivityKind::from(s);
    if ActivityKind::KNOWN.contains(&kind) {
        return Ok(kind);
    }
    let known: Vec<&str> = ActivityKind::KNOWN.iter().map(ActivityKind::as_str).collect();
    Err(format!("unknown activity type {s:?} (expected one of: {})", known.join(", ")))
}

fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --now timestamp: {s}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn read_feed(path: &Path) -> Result<Vec<ActivityRecord>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read feed from stdin")?;
        return parse_feed(&buf).context("failed to parse feed JSON");
    }

    load_feed(path).with_context(|| format!("failed to read feed file {}", path.display()))
}

fn print_feed(feed: &FeedRender, format: OutputFormat) -> Result<()> {
    for entry in &feed.entries {
        match format {
            OutputFormat::Text => println!("{}", entry.text()),
            OutputFormat::Md => println!("- {}", entry.rich.to_markdown(&PathLinks)),
            OutputFormat::Json => {
                let line = JsonLine {
                    id: &entry.activity_id,
                    timestamp: entry.timestamp,
                    text: entry.text(),
                    spans: entry.rich.linked(&PathLinks),
                };
                println!("{}", serde_json::to_string(&line)?);
            }
        }
    }
    Ok(())
}
