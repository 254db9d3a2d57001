//! Activity rendering
//!
//! Turns an [`ActivityRecord`] into a sentence such as
//! `GamerPro reviewed Elden Ring: "An absolute masterpiece" · 2h`.
//!
//! Both outputs come from one segment builder:
//! - [`ActivityRenderer::render_rich`] keeps actor, target and game as
//!   reference [`Segment`]s so a UI can attach links
//! - [`ActivityRenderer::render_text`] flattens the same segments to a string

pub mod segment;
pub mod templates;

pub use segment::{LinkResolver, LinkedSpan, PathLinks, RichActivity, Segment};
pub use templates::{template_for, VerbTemplate};

use crate::error::{Error, Result};
use crate::format::{
    collapse_whitespace, format_relative_time_at, truncate_text_with, ELLIPSIS,
};
use crate::types::ActivityRecord;
use chrono::{DateTime, Utc};

/// Subject shown when the viewer performed the activity
pub const SELF_SUBJECT: &str = "You";

/// Knobs for activity sentences
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum characters of content preview before the ellipsis
    pub preview_max_chars: usize,
    /// Marker appended to a truncated preview
    pub ellipsis: String,
    /// Text between the sentence and its relative time
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preview_max_chars: 120,
            ellipsis: ELLIPSIS.to_string(),
            separator: " · ".to_string(),
        }
    }
}

/// Renders activity records into rich or plain sentences.
///
/// Holds only immutable options, so one renderer can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct ActivityRenderer {
    options: RenderOptions,
}

impl ActivityRenderer {
    /// Create a renderer, rejecting a zero preview length up front
    pub fn new(options: RenderOptions) -> Result<Self> {
        if options.preview_max_chars == 0 {
            return Err(Error::invalid("preview_max_chars must be positive"));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render with navigable references.
    pub fn render_rich(
        &self,
        record: &ActivityRecord,
        viewer_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<RichActivity> {
        let template = template_for(&record.kind)
            .ok_or_else(|| Error::UnsupportedActivityType(record.kind.to_string()))?;
        validate(record)?;

        let mut out = SegmentBuilder::default();
        out.push_subject(record, viewer_id);
        out.push_text(" ");
        out.push_text(template.verb);

        if record.kind.requires_target() {
            if let Some(target) = &record.target {
                out.push(Segment::Target {
                    id: target.id.clone(),
                    target: target.kind,
                    label: target.name.clone(),
                });
                out.push_text(template.target_suffix);
            }
        }

        if let Some(game) = &record.game {
            out.push_text(template.game_joiner);
            out.push(Segment::Game {
                id: game.id.clone(),
                label: game.name.clone(),
            });
        }

        if record.kind.requires_content() {
            if let Some(content) = &record.content {
                let preview = truncate_text_with(
                    &collapse_whitespace(content),
                    self.options.preview_max_chars,
                    &self.options.ellipsis,
                )?;
                out.push_text(&format!(": \"{}\"", preview));
            }
        }

        out.push_time(&self.options.separator, record, now);
        Ok(out.finish())
    }

    /// Render as a flat string; equal to `render_rich(..).plain_text()`.
    pub fn render_text(
        &self,
        record: &ActivityRecord,
        viewer_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<String> {
        self.render_rich(record, viewer_id, now)
            .map(|rich| rich.plain_text())
    }

    /// Generic "did something" sentence for records the caller chooses not
    /// to drop. Only the actor and time are used.
    pub fn render_fallback(
        &self,
        record: &ActivityRecord,
        viewer_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<RichActivity> {
        validate_actor(record)?;
        let mut out = SegmentBuilder::default();
        out.push_subject(record, viewer_id);
        out.push_text(" did something");
        out.push_time(&self.options.separator, record, now);
        Ok(out.finish())
    }
}

/// Render with default options.
pub fn render_rich(
    record: &ActivityRecord,
    viewer_id: Option<&str>,
    now: DateTime<Utc>,
) -> Result<RichActivity> {
    ActivityRenderer::default().render_rich(record, viewer_id, now)
}

/// Render as plain text with default options.
pub fn render_text(
    record: &ActivityRecord,
    viewer_id: Option<&str>,
    now: DateTime<Utc>,
) -> Result<String> {
    ActivityRenderer::default().render_text(record, viewer_id, now)
}

fn validate_actor(record: &ActivityRecord) -> Result<()> {
    if record.actor.id.trim().is_empty() {
        return Err(Error::invalid(format!(
            "activity {} has an actor without an id",
            record.id
        )));
    }
    if record.actor.username.trim().is_empty() {
        return Err(Error::invalid(format!(
            "activity {} has an actor without a username",
            record.id
        )));
    }
    Ok(())
}

fn validate(record: &ActivityRecord) -> Result<()> {
    validate_actor(record)?;

    let kind = &record.kind;
    if kind.requires_target() && record.target.is_none() {
        return Err(Error::invalid(format!(
            "{kind} activity {} is missing its target",
            record.id
        )));
    }
    if let Some(target) = record.target.as_ref().filter(|_| kind.requires_target()) {
        if target.name.trim().is_empty() {
            return Err(Error::invalid(format!(
                "{kind} activity {} has a target without a name",
                record.id
            )));
        }
    }
    if let Some(game) = &record.game {
        if game.name.trim().is_empty() {
            return Err(Error::invalid(format!(
                "activity {} has a game without a name",
                record.id
            )));
        }
    }
    if kind.requires_content() && record.content.is_none() {
        return Err(Error::invalid(format!(
            "{kind} activity {} is missing its content",
            record.id
        )));
    }

    if !kind.requires_target() && record.target.is_some() {
        tracing::debug!(activity_id = %record.id, %kind, "ignoring target");
    }
    if !kind.requires_content() && record.content.is_some() {
        tracing::debug!(activity_id = %record.id, %kind, "ignoring content");
    }
    Ok(())
}

/// Accumulates segments, merging adjacent text.
#[derive(Default)]
struct SegmentBuilder {
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text { value }) = self.segments.last_mut() {
            value.push_str(text);
        } else {
            self.segments.push(Segment::Text {
                value: text.to_string(),
            });
        }
    }

    fn push_subject(&mut self, record: &ActivityRecord, viewer_id: Option<&str>) {
        let label = if record.is_own(viewer_id) {
            SELF_SUBJECT.to_string()
        } else {
            record.actor.username.clone()
        };
        self.push(Segment::Actor {
            id: record.actor.id.clone(),
            label,
        });
    }

    fn push_time(&mut self, separator: &str, record: &ActivityRecord, now: DateTime<Utc>) {
        self.push_text(separator);
        self.push_text(&format_relative_time_at(record.timestamp, now));
    }

    fn finish(self) -> RichActivity {
        RichActivity {
            segments: self.segments,
        }
    }
}
