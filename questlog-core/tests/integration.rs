//! Integration tests for feed loading and rendering
//!
//! These tests use `tests/fixtures/feed.json`, a feed with every supported
//! activity kind plus one unsupported and one malformed record.

use chrono::{DateTime, TimeZone, Utc};
use questlog_core::activity::{ActivityRenderer, PathLinks, RenderOptions, Segment};
use questlog_core::feed::{render_feed, FeedOptions};
use questlog_core::types::{ActivityKind, ActivityRecord};
use questlog_core::Error;
use std::path::PathBuf;

/// Get the path to a fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_feed() -> Vec<ActivityRecord> {
    questlog_core::load_feed(&fixture_path("feed.json")).expect("fixture should deserialize")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

// ============================================
// Feed rendering
// ============================================

#[test]
fn test_fixture_feed_renders_in_order() {
    questlog_core::logging::init_test();
    let records = load_feed();
    assert_eq!(records.len(), 7);

    let feed = render_feed(
        &ActivityRenderer::default(),
        &records,
        None,
        now(),
        &FeedOptions::default(),
    );

    let lines: Vec<String> = feed.entries.iter().map(|e| e.text()).collect();
    assert_eq!(
        lines,
        [
            "GamerPro reviewed Elden Ring: \"Elden Ring is an absolute masterpiece...\" · 2h",
            "PixelQueen liked GamerPro's review of Elden Ring · 1d",
            "GamerPro liked SpeedRunner's comment on Hades · 1d",
            "SpeedRunner commented on Hades: \"Completely agree about the soundtrack, the boss \
             themes are some of the best in the genre and I still listen to them whil...\" · 1w",
            "PixelQueen replied to SpeedRunner's comment on Hades · 1y",
        ]
    );

    let failed: Vec<&str> = feed
        .failures
        .iter()
        .map(|f| f.activity_id.as_str())
        .collect();
    assert_eq!(failed, ["act-007", "act-006"]);
    assert!(matches!(feed.failures[0].error, Error::InvalidInput(_)));
    assert!(matches!(
        feed.failures[1].error,
        Error::UnsupportedActivityType(_)
    ));
    assert_eq!(feed.summary().unwrap(), "5 activities, 2 skipped");
}

#[test]
fn test_viewer_sees_own_activity_as_you() {
    let records = load_feed();
    let feed = render_feed(
        &ActivityRenderer::default(),
        &records,
        Some("user-1"),
        now(),
        &FeedOptions::default(),
    );

    let own: Vec<String> = feed
        .entries
        .iter()
        .filter(|e| e.activity_id == "act-001" || e.activity_id == "act-004")
        .map(|e| e.text())
        .collect();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|line| line.starts_with("You ")));

    let others = feed
        .entries
        .iter()
        .filter(|e| e.activity_id == "act-002")
        .map(|e| e.text())
        .next()
        .unwrap();
    assert!(others.starts_with("PixelQueen "));
}

#[test]
fn test_rich_and_text_agree_for_fixture() {
    let renderer = ActivityRenderer::default();
    for record in load_feed() {
        let rich = renderer.render_rich(&record, Some("user-2"), now());
        let text = renderer.render_text(&record, Some("user-2"), now());
        match (rich, text) {
            (Ok(rich), Ok(text)) => assert_eq!(rich.plain_text(), text),
            (Err(_), Err(_)) => {}
            _ => panic!("rich and text disagree for {}", record.id),
        }
    }
}

#[test]
fn test_markdown_links_for_like() {
    let records = load_feed();
    let like = records.iter().find(|r| r.id == "act-002").unwrap();

    let rich = ActivityRenderer::default()
        .render_rich(like, None, now())
        .unwrap();
    assert_eq!(
        rich.to_markdown(&PathLinks),
        "[PixelQueen](</profile/user-2>) liked [GamerPro](</review/review-44>)'s review of \
         [Elden Ring](</game/game-elden>) · 1d"
    );
    assert_eq!(
        rich.segments.iter().filter(|s| s.is_reference()).count(),
        3
    );
    assert!(matches!(rich.segments[0], Segment::Actor { .. }));
}

#[test]
fn test_kind_filter_and_fallback() {
    let records = load_feed();
    let options = FeedOptions {
        kinds: vec![
            ActivityKind::Review,
            ActivityKind::Other("unknown_event".to_string()),
        ],
        fallback_unsupported: true,
    };

    let feed = render_feed(&ActivityRenderer::default(), &records, None, now(), &options);
    let lines: Vec<String> = feed.entries.iter().map(|e| e.text()).collect();
    assert_eq!(
        lines,
        [
            "SpeedRunner did something · 1h",
            "GamerPro reviewed Elden Ring: \"Elden Ring is an absolute masterpiece...\" · 2h",
        ]
    );
    assert_eq!(feed.filtered, 5);
    assert!(feed.failures.is_empty());
}

#[test]
fn test_custom_render_options() {
    let renderer = ActivityRenderer::new(RenderOptions {
        preview_max_chars: 40,
        ellipsis: "…".to_string(),
        separator: " | ".to_string(),
    })
    .unwrap();
    let records = load_feed();
    let comment = records.iter().find(|r| r.id == "act-003").unwrap();

    assert_eq!(
        renderer.render_text(comment, None, now()).unwrap(),
        "SpeedRunner commented on Hades: \"Completely agree about the soundtrack, t…\" | 1w"
    );
}

#[test]
fn test_records_round_trip_through_json() {
    let records = load_feed();
    let json = serde_json::to_string(&records).unwrap();
    let back: Vec<ActivityRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records, back);
    assert!(json.contains("\"type\":\"unknown_event\""));
}
