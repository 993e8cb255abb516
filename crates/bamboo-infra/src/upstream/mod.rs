//! Upstream AI gateway client.

mod chat;
mod config;

pub use chat::ChatCompletionsClient;
pub use config::GatewayConfig;
