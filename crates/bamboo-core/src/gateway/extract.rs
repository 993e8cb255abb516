//! Recovery of a structured post from a free-text model reply.
//!
//! Strategies are tried in order and the first one that yields a post wins.
//! When all of them fail the reply is wrapped into a degraded post instead of
//! being reported as an error.

use crate::domain::{GeneratedPost, Generation};

type Strategy = fn(&str) -> Option<GeneratedPost>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("json_fence", json_fence),
    ("any_fence", any_fence),
    ("whole_message", whole_message),
];

/// Fenced code blocks as `(info_string, body)` pairs, in order of appearance.
///
/// A block closes at the first fence that starts a new line.
fn fenced_blocks(text: &str) -> Vec<(&str, &str)> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find("```") {
        let after_open = &rest[open + 3..];
        let Some(newline) = after_open.find('\n') else {
            break;
        };
        let info = after_open[..newline].trim();
        let body = &after_open[newline + 1..];
        let Some(close) = body.find("\n```") else {
            break;
        };

        blocks.push((info, &body[..close]));
        rest = &body[close + 4..];
    }

    blocks
}

fn parse(candidate: &str) -> Option<GeneratedPost> {
    serde_json::from_str(candidate.trim()).ok()
}

fn json_fence(text: &str) -> Option<GeneratedPost> {
    fenced_blocks(text)
        .into_iter()
        .filter(|(info, _)| info.eq_ignore_ascii_case("json"))
        .find_map(|(_, body)| parse(body))
}

fn any_fence(text: &str) -> Option<GeneratedPost> {
    fenced_blocks(text)
        .into_iter()
        .find_map(|(_, body)| parse(body))
}

fn whole_message(text: &str) -> Option<GeneratedPost> {
    parse(text)
}

/// Post synthesized from raw text when no strategy succeeds.
pub fn degraded(raw: &str, topic: &str) -> GeneratedPost {
    // `topic` arrives already trimmed by validation; the title uses it as is.
    GeneratedPost {
        title: topic.to_string(),
        excerpt: format!("Learn about {topic} in web development"),
        content: raw.to_string(),
    }
}

/// Recover the post from a model reply. Never fails.
pub fn extract_post(raw: &str, topic: &str) -> Generation {
    for (name, strategy) in STRATEGIES {
        if let Some(post) = strategy(raw) {
            tracing::debug!(strategy = name, "Parsed structured generation reply");
            return Generation {
                post,
                degraded: false,
            };
        }
    }

    tracing::warn!(
        reply_len = raw.len(),
        "Failed to parse AI reply as JSON, falling back to raw text"
    );

    Generation {
        post: degraded(raw, topic),
        degraded: true,
    }
}
