//! Text generation ports.

use async_trait::async_trait;

use crate::domain::Generation;
use crate::error::GatewayError;

/// System and user messages for one chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

/// Upstream chat-completion API.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the content of the first choice.
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, UpstreamError>;
}

/// Upstream call failures.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// No API key configured; nothing was sent.
    #[error("AI gateway API key is not configured")]
    MissingApiKey,

    #[error("upstream rate limit exceeded")]
    RateLimited,

    #[error("upstream credits exhausted")]
    QuotaExhausted,

    #[error("upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream transport error: {0}")]
    Transport(String),

    #[error("unexpected upstream reply: {0}")]
    MalformedReply(String),
}

/// Something that can draft a post from a topic on behalf of a credential.
///
/// The gateway implements this in-process; the composer only sees the trait.
#[async_trait]
pub trait BlogGenerator: Send + Sync {
    async fn generate(
        &self,
        credential: &str,
        topic: &str,
        tone: &str,
    ) -> Result<Generation, GatewayError>;
}
