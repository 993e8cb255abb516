//! PostgreSQL persistence.

mod connections;
mod postgres_content;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use postgres_content::PostgresContentService;
