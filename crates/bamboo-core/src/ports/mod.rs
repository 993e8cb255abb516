//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod content;
mod generator;

pub use auth::{AuthError, TokenService};
pub use content::ContentService;
pub use generator::{BlogGenerator, ChatPrompt, TextGenerator, UpstreamError};
