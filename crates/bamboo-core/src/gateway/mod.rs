//! AI generation gateway.
//!
//! Every request walks `auth -> role -> input -> upstream -> parse`. The first
//! three steps fail fast, so unauthenticated, unauthorized or malformed
//! requests never reach the upstream API. Nothing is persisted here.

mod extract;
mod prompt;

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Generation, GenerationRequest, Identity, Role};
use crate::error::GatewayError;
use crate::ports::{BlogGenerator, ContentService, TextGenerator, UpstreamError};
use crate::validation::{Violation, validate_generation_request};

pub use extract::{degraded, extract_post};
pub use prompt::build_prompt;

impl From<UpstreamError> for GatewayError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::MissingApiKey => {
                GatewayError::Misconfigured("AI gateway API key is not configured".to_string())
            }
            UpstreamError::RateLimited => GatewayError::RateLimited,
            UpstreamError::QuotaExhausted => GatewayError::QuotaExhausted,
            UpstreamError::Status { status, body } => GatewayError::Upstream {
                status: Some(status),
                body,
            },
            UpstreamError::Timeout => GatewayError::Upstream {
                status: None,
                body: "upstream request timed out".to_string(),
            },
            UpstreamError::Transport(body) | UpstreamError::MalformedReply(body) => {
                GatewayError::Upstream { status: None, body }
            }
        }
    }
}

impl From<Violation> for GatewayError {
    fn from(violation: Violation) -> Self {
        GatewayError::InvalidArgument {
            field: violation.field,
            reason: violation.message,
        }
    }
}

/// Read `{ "topic": string, "tone"?: string }` from a JSON body.
pub fn parse_request(body: &[u8]) -> Result<GenerationRequest, GatewayError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| GatewayError::invalid("body", format!("must be valid JSON: {e}")))?;

    let Value::Object(fields) = value else {
        return Err(GatewayError::invalid("body", "must be a JSON object"));
    };

    let topic = match fields.get("topic") {
        Some(Value::String(topic)) => topic.as_str(),
        None | Some(Value::Null) => {
            return Err(GatewayError::invalid("topic", "must be a non-empty string"));
        }
        Some(_) => return Err(GatewayError::invalid("topic", "must be a string")),
    };

    let tone = match fields.get("tone") {
        Some(Value::String(tone)) => Some(tone.as_str()),
        None | Some(Value::Null) => None,
        Some(_) => return Err(GatewayError::invalid("tone", "must be a string")),
    };

    validate_generation_request(topic, tone).map_err(GatewayError::from)
}

/// Server-side boundary in front of the upstream text-generation API.
#[derive(Clone)]
pub struct GenerationGateway {
    content: Arc<dyn ContentService>,
    upstream: Arc<dyn TextGenerator>,
}

impl GenerationGateway {
    pub fn new(content: Arc<dyn ContentService>, upstream: Arc<dyn TextGenerator>) -> Self {
        Self { content, upstream }
    }

    /// Run one request from its raw credential and JSON body.
    pub async fn handle(
        &self,
        credential: Option<&str>,
        body: &[u8],
    ) -> Result<Generation, GatewayError> {
        self.authorize(credential).await?;
        let request = parse_request(body)?;
        self.dispatch(&request).await
    }

    /// Like [`handle`](Self::handle), but gives up with [`GatewayError::Cancelled`]
    /// as soon as `cancel` completes. No retry is attempted.
    pub async fn handle_until<F>(
        &self,
        credential: Option<&str>,
        body: &[u8],
        cancel: F,
    ) -> Result<Generation, GatewayError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                tracing::info!("Generation request cancelled by caller");
                Err(GatewayError::Cancelled)
            }
            result = self.handle(credential, body) => result,
        }
    }

    /// Authentication and admin role check.
    async fn authorize(&self, credential: Option<&str>) -> Result<Identity, GatewayError> {
        let credential = credential
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or(GatewayError::Unauthenticated("No authorization header"))?;

        let identity = self
            .content
            .get_identity(credential)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Authentication error");
                GatewayError::Unauthenticated("Invalid token")
            })?;

        match self.content.has_role(identity.id, Role::Admin).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(user_id = %identity.id, "Role check failed: not an admin");
                return Err(GatewayError::Forbidden);
            }
            Err(e) => {
                tracing::error!(user_id = %identity.id, error = %e, "Role check failed");
                return Err(GatewayError::Forbidden);
            }
        }

        tracing::info!(user_id = %identity.id, "Admin user authorized for blog generation");
        Ok(identity)
    }

    /// Upstream call and reply parsing for an already authorized, validated request.
    async fn dispatch(&self, request: &GenerationRequest) -> Result<Generation, GatewayError> {
        tracing::info!(topic = %request.topic, tone = %request.tone, "Generating blog");

        let prompt = build_prompt(request);
        let reply = self.upstream.complete(&prompt).await.map_err(|e| {
            tracing::warn!(error = %e, "AI gateway call failed");
            GatewayError::from(e)
        })?;

        let generation = extract_post(&reply, &request.topic);
        tracing::info!(
            title = %generation.post.title,
            degraded = generation.degraded,
            "Successfully generated blog"
        );

        Ok(generation)
    }
}

#[async_trait]
impl BlogGenerator for GenerationGateway {
    async fn generate(
        &self,
        credential: &str,
        topic: &str,
        tone: &str,
    ) -> Result<Generation, GatewayError> {
        self.authorize(Some(credential)).await?;
        let request = validate_generation_request(topic, Some(tone))?;
        self.dispatch(&request).await
    }
}

#[cfg(test)]
mod tests;
