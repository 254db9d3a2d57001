//! Rendered sentence pieces and link attachment.

use crate::types::TargetKind;
use serde::{Deserialize, Serialize};

/// One piece of a rendered activity sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Plain words
    Text { value: String },
    /// Reference to the acting user ("You" when the viewer is the actor)
    Actor { id: String, label: String },
    /// Reference to the liked or replied-to review/comment
    Target {
        id: String,
        target: TargetKind,
        label: String,
    },
    /// Reference to a game
    Game { id: String, label: String },
}

impl Segment {
    /// Visible text of this segment
    pub fn label(&self) -> &str {
        match self {
            Segment::Text { value } => value,
            Segment::Actor { label, .. }
            | Segment::Target { label, .. }
            | Segment::Game { label, .. } => label,
        }
    }

    /// Whether this segment refers to something a UI can navigate to
    pub fn is_reference(&self) -> bool {
        !matches!(self, Segment::Text { .. })
    }
}

/// A rendered activity that keeps its references navigable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichActivity {
    pub segments: Vec<Segment>,
}

impl RichActivity {
    /// Flatten to plain text, dropping navigability
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::label).collect()
    }

    /// Attach an href to every reference segment
    pub fn linked<R: LinkResolver + ?Sized>(&self, resolver: &R) -> Vec<LinkedSpan> {
        self.segments
            .iter()
            .map(|segment| LinkedSpan {
                text: segment.label().to_string(),
                href: resolver.href(segment),
            })
            .collect()
    }

    /// Render as Markdown with references as `[label](<href>)`.
    ///
    /// All text is escaped, so markup inside user content stays literal.
    pub fn to_markdown<R: LinkResolver + ?Sized>(&self, resolver: &R) -> String {
        self.linked(resolver)
            .iter()
            .map(|span| match &span.href {
                Some(href) => format!("[{}](<{}>)", escape_markdown(&span.text), href),
                None => escape_markdown(&span.text),
            })
            .collect()
    }
}

/// Backslash-escape inline Markdown syntax
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '`' | '*' | '_' | '[' | ']' | '(' | ')' | '<' | '>' | '!' | '#' | '|' | '~'
                | '&'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A piece of text with an optional link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedSpan {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Maps reference segments to navigation targets.
pub trait LinkResolver {
    /// Returns the href for `segment`, `None` for plain text
    fn href(&self, segment: &Segment) -> Option<String>;
}

/// Default site routes: `/profile/{id}`, `/game/{id}`, `/review/{id}`, `/comment/{id}`
///
/// Ids are percent-encoded, so each one stays a single path segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLinks;

impl LinkResolver for PathLinks {
    fn href(&self, segment: &Segment) -> Option<String> {
        match segment {
            Segment::Text { .. } => None,
            Segment::Actor { id, .. } => Some(format!("/profile/{}", urlencoding::encode(id))),
            Segment::Game { id, .. } => Some(format!("/game/{}", urlencoding::encode(id))),
            Segment::Target { id, target, .. } => Some(format!(
                "/{}/{}",
                target.as_str(),
                urlencoding::encode(id)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RichActivity {
        RichActivity {
            segments: vec![
                Segment::Actor {
                    id: "u1".into(),
                    label: "GamerPro".into(),
                },
                Segment::Text {
                    value: " liked ".into(),
                },
                Segment::Target {
                    id: "c7".into(),
                    target: TargetKind::Comment,
                    label: "Alice".into(),
                },
                Segment::Text {
                    value: "'s comment on ".into(),
                },
                Segment::Game {
                    id: "g1".into(),
                    label: "Hades [Deluxe]".into(),
                },
            ],
        }
    }

    #[test]
    fn test_plain_text_concatenates_labels() {
        assert_eq!(
            sample().plain_text(),
            "GamerPro liked Alice's comment on Hades [Deluxe]"
        );
    }

    #[test]
    fn test_path_links() {
        let spans = sample().linked(&PathLinks);
        assert_eq!(spans[0].href.as_deref(), Some("/profile/u1"));
        assert_eq!(spans[1].href, None);
        assert_eq!(spans[2].href.as_deref(), Some("/comment/c7"));
        assert_eq!(spans[4].href.as_deref(), Some("/game/g1"));
    }

    #[test]
    fn test_markdown_escapes_labels() {
        assert_eq!(
            sample().to_markdown(&PathLinks),
            "[GamerPro](</profile/u1>) liked [Alice](</comment/c7>)'s comment on \
             [Hades \\[Deluxe\\]](</game/g1>)"
        );
    }

    #[test]
    fn test_ids_are_percent_encoded() {
        let rich = RichActivity {
            segments: vec![
                Segment::Actor {
                    id: "a b)".into(),
                    label: "GamerPro".into(),
                },
                Segment::Game {
                    id: "../admin?x=1#y".into(),
                    label: "Hades".into(),
                },
            ],
        };
        let spans = rich.linked(&PathLinks);
        assert_eq!(spans[0].href.as_deref(), Some("/profile/a%20b%29"));
        assert_eq!(spans[1].href.as_deref(), Some("/game/..%2Fadmin%3Fx%3D1%23y"));
        assert_eq!(
            rich.to_markdown(&PathLinks),
            "[GamerPro](</profile/a%20b%29>)[Hades](</game/..%2Fadmin%3Fx%3D1%23y>)"
        );
    }

    #[test]
    fn test_markdown_in_content_stays_literal() {
        let rich = RichActivity {
            segments: vec![
                Segment::Actor {
                    id: "u1".into(),
                    label: "Gamer\\".into(),
                },
                Segment::Text {
                    value: ": \"see [free skins](http://evil.example) *now*\"".into(),
                },
            ],
        };
        assert_eq!(
            rich.to_markdown(&PathLinks),
            "[Gamer\\\\](</profile/u1>): \"see \\[free skins\\]\\(http://evil.example\\) \\*now\\*\""
        );
    }

    #[test]
    fn test_segment_serializes_with_kind_tag() {
        let json = serde_json::to_value(&sample().segments[2]).unwrap();
        assert_eq!(json["kind"], "target");
        assert_eq!(json["target"], "comment");
        assert_eq!(json["label"], "Alice");
    }
}
