use serde::{Deserialize, Serialize};

/// A validated request for AI-assisted drafting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Trimmed, 1..=200 chars.
    pub topic: String,
    /// Trimmed, at most 50 chars.
    pub tone: String,
}

impl GenerationRequest {
    pub const DEFAULT_TONE: &'static str = "professional";
    pub const MAX_TOPIC_CHARS: usize = 200;
    pub const MAX_TONE_CHARS: usize = 50;
}

/// Title, excerpt and Markdown body produced by the upstream model.
///
/// These are not checked against the post schema; callers revalidate before saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
}

/// Outcome of a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub post: GeneratedPost,
    /// Set when the upstream reply could not be parsed and the post was synthesized from raw text.
    pub degraded: bool,
}
