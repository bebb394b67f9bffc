//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseSettings>,
    pub admin: AdminConfig,
}

/// PostgreSQL settings; `None` when `DATABASE_URL` is unset and the server
/// falls back to the in-memory store.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// The single author account the login stub accepts. The password arrives in
/// plain text and is hashed at startup; this is a development stub, not an
/// account system.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseSettings {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        let admin = AdminConfig {
            email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "professor@example.com".to_string()),
            name: env::var("ADMIN_NAME").unwrap_or_else(|_| "Professor".to_string()),
            password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "professor123".to_string()),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database,
            admin,
        }
    }
}
