//! Core domain types for questlog
//!
//! These types describe the activity records delivered by the feed backend.
//! They are plain data: the renderer borrows them and never mutates them.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Activity** | A recorded social event: a review posted, a like given, a comment posted, liked or replied to |
//! | **Actor** | The user who performed the activity |
//! | **Target** | The review or comment a like or reply refers to |
//! | **Game** | The game the activity concerns |
//! | **Viewer** | The user looking at the feed; only decides "You" vs the actor's username |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================
// Activity kinds
// ============================================

/// What happened in an activity.
///
/// Unknown kinds coming off the wire are preserved as [`ActivityKind::Other`]
/// so that a feed with one unexpected record still deserializes; rendering
/// that record fails with [`crate::Error::UnsupportedActivityType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityKind {
    Review,
    ReviewLike,
    Comment,
    CommentLike,
    CommentReply,
    Other(String),
}

impl ActivityKind {
    /// Every kind the renderer knows how to describe
    pub const KNOWN: [ActivityKind; 5] = [
        ActivityKind::Review,
        ActivityKind::ReviewLike,
        ActivityKind::Comment,
        ActivityKind::CommentLike,
        ActivityKind::CommentReply,
    ];

    /// Returns the wire identifier
    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Review => "review",
            ActivityKind::ReviewLike => "review_like",
            ActivityKind::Comment => "comment",
            ActivityKind::CommentLike => "comment_like",
            ActivityKind::CommentReply => "comment_reply",
            ActivityKind::Other(s) => s,
        }
    }

    /// Whether a record of this kind must carry a [`Target`]
    pub fn requires_target(&self) -> bool {
        matches!(
            self,
            ActivityKind::ReviewLike | ActivityKind::CommentLike | ActivityKind::CommentReply
        )
    }

    /// Whether a record of this kind must carry content
    pub fn requires_content(&self) -> bool {
        matches!(self, ActivityKind::Review | ActivityKind::Comment)
    }
}

impl From<&str> for ActivityKind {
    fn from(s: &str) -> Self {
        match s {
            "review" => ActivityKind::Review,
            "review_like" => ActivityKind::ReviewLike,
            "comment" => ActivityKind::Comment,
            "comment_like" => ActivityKind::CommentLike,
            "comment_reply" => ActivityKind::CommentReply,
            other => ActivityKind::Other(other.to_string()),
        }
    }
}

impl From<String> for ActivityKind {
    fn from(s: String) -> Self {
        ActivityKind::from(s.as_str())
    }
}

impl From<ActivityKind> for String {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================
// Participants
// ============================================

/// The user who performed an activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub username: String,
    /// Avatar image reference, unused by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// What a target points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Review,
    Comment,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Review => "review",
            TargetKind::Comment => "comment",
        }
    }
}

/// The review or comment a like or reply refers to.
///
/// `name` is the display name of the target's author, as in
/// "liked **Alice**'s review".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub kind: TargetKind,
    pub name: String,
}

/// The game an activity concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

// ============================================
// Activity record
// ============================================

/// One entry of an activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub timestamp: DateTime<Utc>,
    pub actor: Actor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Target>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ActivityRecord {
    /// Whether `viewer_id` identifies the actor of this activity
    pub fn is_own(&self, viewer_id: Option<&str>) -> bool {
        viewer_id.is_some_and(|viewer| viewer == self.actor.id)
    }
}
