//! # Bamboo Infrastructure
//!
//! Concrete implementations of the ports defined in `bamboo-core`.
//! This crate contains the content stores, token verification and the AI
//! gateway client.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database or JWT support, in-memory store only
//! - `postgres` - PostgreSQL content store via SeaORM
//! - `auth` - JWT token verification

pub mod memory;
pub mod upstream;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use memory::InMemoryContentService;
pub use upstream::{ChatCompletionsClient, GatewayConfig};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresContentService};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
