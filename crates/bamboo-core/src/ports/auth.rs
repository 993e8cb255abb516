//! Credential verification port.

use crate::domain::Identity;

/// Bearer credential service.
///
/// Credentials are issued by the identity provider; the server only needs to
/// verify them.
pub trait TokenService: Send + Sync {
    /// Issue a credential for an identity.
    ///
    /// Not called on any request path. Kept for provisioning tools and for
    /// tests that need a credential the matching `verify` accepts.
    fn issue(&self, identity: &Identity) -> Result<String, AuthError>;

    /// Verify a credential and resolve the identity behind it.
    fn verify(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
