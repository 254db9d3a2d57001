//! Verb templates keyed by activity kind.
//!
//! Adding a kind is one entry here plus its required-field rules in
//! [`ActivityKind::requires_target`] and [`ActivityKind::requires_content`].

use crate::types::ActivityKind;

/// How one kind of activity reads in a sentence.
///
/// A rendered sentence is laid out as
/// `{subject} {verb}{target}{target_suffix}{game_joiner}{game}`; the target
/// parts only appear for kinds that carry a target, the game parts only
/// when the record names a game.
#[derive(Debug)]
pub struct VerbTemplate {
    pub kind: ActivityKind,
    /// Verb phrase up to the target name (or the whole phrase without one)
    pub verb: &'static str,
    /// Text right after the target name
    pub target_suffix: &'static str,
    /// Text between the phrase and the game name
    pub game_joiner: &'static str,
}

static TEMPLATES: [VerbTemplate; 5] = [
    VerbTemplate {
        kind: ActivityKind::Review,
        verb: "reviewed",
        target_suffix: "",
        game_joiner: " ",
    },
    VerbTemplate {
        kind: ActivityKind::ReviewLike,
        verb: "liked ",
        target_suffix: "'s review",
        game_joiner: " of ",
    },
    VerbTemplate {
        kind: ActivityKind::Comment,
        verb: "commented",
        target_suffix: "",
        game_joiner: " on ",
    },
    VerbTemplate {
        kind: ActivityKind::CommentLike,
        verb: "liked ",
        target_suffix: "'s comment",
        game_joiner: " on ",
    },
    VerbTemplate {
        kind: ActivityKind::CommentReply,
        verb: "replied to ",
        target_suffix: "'s comment",
        game_joiner: " on ",
    },
];

/// Look up the template for `kind`, `None` for kinds outside the table
pub fn template_for(kind: &ActivityKind) -> Option<&'static VerbTemplate> {
    TEMPLATES.iter().find(|t| &t.kind == kind)
}
