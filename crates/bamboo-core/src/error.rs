//! Domain-level error types.

use thiserror::Error;

use crate::validation::Violation;

/// Content store errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The store's row-level policy refused the write.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
}

/// Terminal failures of the AI generation gateway.
///
/// Display strings are sent to the client verbatim.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Unauthorized - {0}")]
    Unauthenticated(&'static str),

    #[error("Forbidden - Admin access required")]
    Forbidden,

    #[error("{field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Server misconfigured: {0}")]
    Misconfigured(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add credits to your workspace.")]
    QuotaExhausted,

    #[error("AI gateway error: {}", describe_status(.status))]
    Upstream { status: Option<u16>, body: String },

    #[error("Generation was cancelled")]
    Cancelled,
}

fn describe_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_string(),
    }
}

impl GatewayError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// HTTP status used at the boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unauthenticated(_) => 401,
            Self::Forbidden => 403,
            Self::InvalidArgument { .. } => 400,
            Self::RateLimited => 429,
            Self::QuotaExhausted => 402,
            Self::Misconfigured(_) | Self::Upstream { .. } | Self::Cancelled => 500,
        }
    }
}

/// Failures of admin-only reads.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("Unauthorized - Not authenticated")]
    Unauthenticated,

    #[error("Forbidden - Admin access required")]
    Forbidden,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Failures surfaced to the operator by the admin composer.
///
/// Each renders as a single human-readable line.
#[derive(Debug, Error)]
pub enum ComposerError {
    #[error("Please enter a topic for the blog post")]
    TopicRequired,

    #[error("{0}")]
    Validation(#[from] Violation),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Generation failed: {0}")]
    Generation(#[from] GatewayError),

    #[error("Failed to save blog post: {0}")]
    Persistence(#[from] RepoError),
}
