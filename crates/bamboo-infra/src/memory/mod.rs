//! In-memory implementations - used as fallback when no database is configured.

mod content;

pub use content::InMemoryContentService;
