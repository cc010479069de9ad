//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use blog_core::PageLimits;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseSettings>,
    pub page_limits: PageLimits,
}

/// PostgreSQL settings; present only when `DATABASE_URL` is set.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseSettings {
                url,
                max_connections: var_or("DB_MAX_CONNECTIONS", 20),
                min_connections: var_or("DB_MIN_CONNECTIONS", 2),
                auto_migrate: flag_or("DB_AUTO_MIGRATE", true),
            });

        let defaults = PageLimits::default();
        let max_size = var_or("PAGE_MAX_SIZE", defaults.max_size).max(1);
        let page_limits = PageLimits {
            default_size: var_or("PAGE_DEFAULT_SIZE", defaults.default_size).clamp(1, max_size),
            max_size,
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: var_or("PORT", 8080),
            database,
            page_limits,
        }
    }
}

/// Parse `key`, falling back to `default` when unset or malformed.
fn var_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn flag_or(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
        .unwrap_or(default)
}
