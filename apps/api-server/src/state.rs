//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use bamboo_core::GenerationGateway;
use bamboo_core::ports::{BlogGenerator, ContentService, TextGenerator, TokenService};
use bamboo_infra::{ChatCompletionsClient, InMemoryContentService, JwtTokenService};

#[cfg(feature = "postgres")]
use bamboo_infra::PostgresContentService;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentService>,
    pub gateway: GenerationGateway,
}

impl AppState {
    pub fn from_parts(content: Arc<dyn ContentService>, upstream: Arc<dyn TextGenerator>) -> Self {
        let gateway = GenerationGateway::new(content.clone(), upstream);
        Self { content, gateway }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        let content = Self::content_service(config, tokens).await;

        if config.gateway.api_key.is_none() {
            tracing::warn!("AI_GATEWAY_API_KEY not set. Blog generation requests will fail.");
        }
        let upstream = ChatCompletionsClient::new(config.gateway.clone()).map_err(io::Error::other)?;

        tracing::info!("Application state initialized");
        Ok(Self::from_parts(content, Arc::new(upstream)))
    }

    /// The gateway, seen through the port the composer consumes.
    pub fn generator(&self) -> Arc<dyn BlogGenerator> {
        Arc::new(self.gateway.clone())
    }

    #[cfg(feature = "postgres")]
    async fn content_service(
        config: &AppConfig,
        tokens: Arc<dyn TokenService>,
    ) -> Arc<dyn ContentService> {
        let Some(db_config) = &config.database else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory(config, tokens);
        };

        match bamboo_infra::database::connect(db_config).await {
            Ok(conn) => Arc::new(PostgresContentService::new(conn, tokens)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory(config, tokens)
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn content_service(
        config: &AppConfig,
        tokens: Arc<dyn TokenService>,
    ) -> Arc<dyn ContentService> {
        tracing::info!("Running without postgres feature - using in-memory store");
        Self::in_memory(config, tokens)
    }

    fn in_memory(config: &AppConfig, tokens: Arc<dyn TokenService>) -> Arc<dyn ContentService> {
        tracing::info!(admins = config.admin_user_ids.len(), "Seeding in-memory admin roles");
        Arc::new(
            InMemoryContentService::new(tokens).with_admins(config.admin_user_ids.iter().copied()),
        )
    }
}
