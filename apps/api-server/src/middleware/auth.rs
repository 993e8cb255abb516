//! Bearer credential extractor.
//!
//! Verification is not done here: the credential is handed to the gateway or
//! the content store, which decide what it is worth.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header};

/// The raw credential from `Authorization: Bearer <token>`, if any.
///
/// Never rejects a request; a missing or unreadable header yields `None`.
#[derive(Debug, Clone, Default)]
pub struct BearerCredential(pub Option<String>);

impl BearerCredential {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }

    fn from_header(value: &str) -> Option<String> {
        let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
        (!token.is_empty()).then(|| token.to_string())
    }
}

impl FromRequest for BearerCredential {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let credential = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::from_header);

        ready(Ok(BearerCredential(credential)))
    }
}
