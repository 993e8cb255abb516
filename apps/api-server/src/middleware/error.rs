//! Error handling - maps domain failures to `{ "error": ... }` responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use bamboo_core::error::{AdminError, ComposerError, GatewayError, RepoError};
use bamboo_shared::ErrorResponse;

/// Application-level error type.
///
/// Display strings are the client-facing messages, except for `Internal`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    BadRequest {
        message: String,
        field: Option<&'static str>,
    },

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    PaymentRequired(String),

    #[error("{0}")]
    TooManyRequests(String),

    /// Upstream or configuration failure whose message is safe to show.
    #[error("{0}")]
    Gateway(String),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, field: Option<&'static str>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            field,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Gateway(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest {
                message,
                field: Some(field),
            } => ErrorResponse::new(message.clone()).with_field(*field),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::new(self.to_string())
            }
            other => ErrorResponse::new(other.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        let message = err.to_string();
        match err {
            GatewayError::Unauthenticated(_) => AppError::Unauthorized(message),
            GatewayError::Forbidden => AppError::Forbidden(message),
            GatewayError::InvalidArgument { field, .. } => AppError::bad_request(message, Some(field)),
            GatewayError::RateLimited => AppError::TooManyRequests(message),
            GatewayError::QuotaExhausted => AppError::PaymentRequired(message),
            GatewayError::Misconfigured(_) | GatewayError::Upstream { .. } | GatewayError::Cancelled => {
                tracing::error!(error = %message, "Error in generate-blog function");
                AppError::Gateway(message)
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(detail) => {
                tracing::debug!(%detail, "Unique constraint violation");
                AppError::Conflict("A post with this slug already exists".to_string())
            }
            RepoError::PermissionDenied(detail) => {
                tracing::warn!(%detail, "Store refused write");
                AppError::Forbidden("Forbidden - Admin access required".to_string())
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<ComposerError> for AppError {
    fn from(err: ComposerError) -> Self {
        match err {
            ComposerError::TopicRequired => AppError::bad_request(err.to_string(), Some("topic")),
            ComposerError::Validation(violation) => {
                AppError::bad_request(violation.message, Some(violation.field))
            }
            ComposerError::Unauthenticated => AppError::Unauthorized(err.to_string()),
            ComposerError::Generation(inner) => inner.into(),
            ComposerError::Persistence(inner) => inner.into(),
        }
    }
}

impl From<AdminError> for AppError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Unauthenticated => AppError::Unauthorized(err.to_string()),
            AdminError::Forbidden => AppError::Forbidden(err.to_string()),
            AdminError::Repo(inner) => inner.into(),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
