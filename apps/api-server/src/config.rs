//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use uuid::Uuid;

use bamboo_infra::{GatewayConfig, JwtConfig};

#[cfg(feature = "postgres")]
use bamboo_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub gateway: GatewayConfig,
    /// Admin memberships seeded into the in-memory store.
    pub admin_user_ids: Vec<Uuid>,
}

fn parsed<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parsed("DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        let jwt_defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: env::var("JWT_SECRET").unwrap_or(jwt_defaults.secret),
            expiration_hours: parsed("JWT_EXPIRATION_HOURS").unwrap_or(jwt_defaults.expiration_hours),
            issuer: env::var("JWT_ISSUER").unwrap_or(jwt_defaults.issuer),
        };

        let gateway_defaults = GatewayConfig::default();
        let gateway = GatewayConfig {
            endpoint: env::var("AI_GATEWAY_URL").unwrap_or(gateway_defaults.endpoint),
            api_key: env::var("AI_GATEWAY_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("AI_MODEL").unwrap_or(gateway_defaults.model),
            temperature: parsed("AI_TEMPERATURE").unwrap_or(gateway_defaults.temperature),
            timeout_seconds: parsed("AI_TIMEOUT_SECS").unwrap_or(gateway_defaults.timeout_seconds),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT").unwrap_or(8080),
            #[cfg(feature = "postgres")]
            database,
            jwt,
            gateway,
            admin_user_ids: env::var("ADMIN_USER_IDS")
                .map(|ids| parse_ids(&ids))
                .unwrap_or_default(),
        }
    }
}

/// Comma-separated UUIDs; malformed entries are skipped with a warning.
fn parse_ids(raw: &str) -> Vec<Uuid> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match Uuid::parse_str(s) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(value = s, error = %e, "Ignoring malformed ADMIN_USER_IDS entry");
                None
            }
        })
        .collect()
}
