//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use lectern_core::domain::{Role, Session, User};
use lectern_core::ports::{PasswordService, PostStore};
use lectern_core::service::PostService;
use lectern_infra::{Argon2PasswordService, MemoryKeyValue, MemoryPostStore};

use crate::config::{AdminConfig, AppConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub session: Session,
    pub passwords: Arc<dyn PasswordService>,
    pub admin: Arc<User>,
    pub admin_password_hash: Arc<str>,
    pub started_at: Instant,
}

impl AppState {
    /// Build the application state, picking the post store from the
    /// configuration: PostgreSQL when available, in-memory otherwise.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        let store = Self::pick_store(config).await;
        Self::with_store(store, &config.admin)
    }

    /// Assemble the state around a given store. Used directly by the
    /// integration tests.
    pub fn with_store(store: Arc<dyn PostStore>, admin: &AdminConfig) -> io::Result<Self> {
        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let admin_password_hash = passwords
            .hash(&admin.password)
            .map_err(|e| io::Error::other(e.to_string()))?;

        let admin_user = User::new(admin.email.clone(), admin.name.clone(), Role::Admin);

        Ok(Self {
            posts: PostService::new(store),
            session: Session::new(Arc::new(MemoryKeyValue::new())),
            passwords,
            admin: Arc::new(admin_user),
            admin_password_hash: admin_password_hash.into(),
            started_at: Instant::now(),
        })
    }

    #[cfg(feature = "postgres")]
    async fn pick_store(config: &AppConfig) -> Arc<dyn PostStore> {
        use lectern_infra::{DatabaseConfig, PgPostStore, connect};

        if let Some(settings) = &config.database {
            let db_config = DatabaseConfig {
                url: settings.url.clone(),
                max_connections: settings.max_connections,
                min_connections: settings.min_connections,
            };
            match connect(&db_config).await {
                Ok(db) => {
                    tracing::info!("Connected to PostgreSQL");
                    return Arc::new(PgPostStore::new(db));
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running with the in-memory post store.");
        }

        Arc::new(MemoryPostStore::new())
    }

    #[cfg(not(feature = "postgres"))]
    async fn pick_store(_config: &AppConfig) -> Arc<dyn PostStore> {
        tracing::info!("Built without the postgres feature - using the in-memory post store");
        Arc::new(MemoryPostStore::new())
    }
}
