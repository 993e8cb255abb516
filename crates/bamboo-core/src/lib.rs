//! # Bamboo Core
//!
//! The domain layer of the Bamboo blog backend.
//! This crate contains the authoring rules (validation, slugs, pagination),
//! the AI generation gateway and the admin composer. Every external system is
//! reached through a port in [`ports`], so nothing here performs I/O directly.

pub mod access;
pub mod composer;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod ports;
pub mod slug;
pub mod validation;

pub use access::{Access, DashboardStats, check_access, dashboard_stats};
pub use composer::Composer;
pub use error::{AdminError, ComposerError, GatewayError, RepoError};
pub use gateway::GenerationGateway;
pub use slug::derive_slug;
pub use validation::{Violation, validate_generation_request, validate_post};

#[cfg(test)]
pub(crate) mod testing;
