//! Blog post input validation.
//!
//! Rules are checked in a fixed field order and the first violation wins, so
//! an operator always sees exactly one message.

use url::Url;

use crate::domain::{GenerationRequest, PostDraft, PostStatus, ValidatedPost};
use crate::slug::is_valid_slug;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_SLUG_CHARS: usize = 200;
pub const MAX_EXCERPT_CHARS: usize = 160;
pub const MAX_CONTENT_CHARS: usize = 50_000;

/// A field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Check a draft against the post schema, returning the normalized record.
///
/// Order: title, slug, excerpt, content, thumbnail URL, status.
pub fn validate_post(draft: &PostDraft) -> Result<ValidatedPost, Violation> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(Violation::new("title", "Title is required"));
    }
    if char_len(title) > MAX_TITLE_CHARS {
        return Err(Violation::new(
            "title",
            format!("Title must be at most {MAX_TITLE_CHARS} characters"),
        ));
    }

    let slug = draft.slug.trim();
    if slug.is_empty() {
        return Err(Violation::new("slug", "Slug is required"));
    }
    if char_len(slug) > MAX_SLUG_CHARS {
        return Err(Violation::new(
            "slug",
            format!("Slug must be at most {MAX_SLUG_CHARS} characters"),
        ));
    }
    if !is_valid_slug(slug) {
        return Err(Violation::new(
            "slug",
            "Slug must only contain lowercase letters, numbers, and hyphens",
        ));
    }

    let excerpt = draft.excerpt.trim();
    if char_len(excerpt) > MAX_EXCERPT_CHARS {
        return Err(Violation::new(
            "excerpt",
            format!("Excerpt must be at most {MAX_EXCERPT_CHARS} characters"),
        ));
    }

    let content = draft.content.trim();
    if content.is_empty() {
        return Err(Violation::new("content", "Content is required"));
    }
    if char_len(content) > MAX_CONTENT_CHARS {
        return Err(Violation::new(
            "content",
            format!("Content must be at most {MAX_CONTENT_CHARS} characters"),
        ));
    }

    let thumbnail_url = draft.thumbnail_url.trim();
    if !thumbnail_url.is_empty() && Url::parse(thumbnail_url).is_err() {
        return Err(Violation::new("thumbnail_url", "Invalid URL"));
    }

    let status: PostStatus = draft.status.parse().map_err(|_| {
        Violation::new(
            "status",
            "Status must be one of: draft, published, archived",
        )
    })?;

    Ok(ValidatedPost {
        title: title.to_string(),
        slug: slug.to_string(),
        excerpt: (!excerpt.is_empty()).then(|| excerpt.to_string()),
        content: content.to_string(),
        thumbnail_url: (!thumbnail_url.is_empty()).then(|| thumbnail_url.to_string()),
        status,
    })
}

/// Check the inputs of a generation request.
///
/// `tone` falls back to [`GenerationRequest::DEFAULT_TONE`] when absent or blank.
pub fn validate_generation_request(
    topic: &str,
    tone: Option<&str>,
) -> Result<GenerationRequest, Violation> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(Violation::new("topic", "must be a non-empty string"));
    }
    if char_len(topic) > GenerationRequest::MAX_TOPIC_CHARS {
        return Err(Violation::new(
            "topic",
            format!(
                "must be at most {} characters",
                GenerationRequest::MAX_TOPIC_CHARS
            ),
        ));
    }

    let tone = tone.map(str::trim).unwrap_or_default();
    if char_len(tone) > GenerationRequest::MAX_TONE_CHARS {
        return Err(Violation::new(
            "tone",
            format!(
                "must be at most {} characters",
                GenerationRequest::MAX_TONE_CHARS
            ),
        ));
    }

    Ok(GenerationRequest {
        topic: topic.to_string(),
        tone: if tone.is_empty() {
            GenerationRequest::DEFAULT_TONE.to_string()
        } else {
            tone.to_string()
        },
    })
}
