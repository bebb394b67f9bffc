//! PostgreSQL post store via SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DbConn, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use lectern_core::domain::{Post, PostPatch, validate_post};
use lectern_core::error::StoreError;
use lectern_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};
use super::text;

/// PostgreSQL connection configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Open a connection pool for the configured database.
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, StoreError> {
    let mut options = ConnectOptions::new(&config.url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);

    tracing::debug!(
        max_connections = config.max_connections,
        "Opening PostgreSQL connection pool"
    );

    Database::connect(options)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))
}

/// Post store backed by the `posts` table.
///
/// Matching and ranking reuse the same scoring as the in-memory store: the
/// active set is fetched newest-first and ranked in process. Fine at blog
/// scale; a dedicated text index would be the next step if volume grew.
pub struct PgPostStore {
    db: DbConn,
}

impl PgPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: Uuid) -> Result<post::Model, StoreError> {
        PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
            .ok_or(StoreError::NotFound)
    }

    /// Active posts, newest first.
    async fn active_posts(&self) -> Result<Vec<Post>, StoreError> {
        let models = PostEntity::find()
            .filter(post::Column::Active.eq(true))
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn matching(&self, term: &str) -> Result<Vec<Post>, StoreError> {
        let active = self.active_posts().await?;
        if term.trim().is_empty() {
            Ok(active)
        } else {
            Ok(text::rank(active, term))
        }
    }

    async fn persist(&self, merged: Post) -> Result<Post, StoreError> {
        let model: post::ActiveModel = merged.into();
        model
            .update(&self.db)
            .await
            .map(Into::into)
            .map_err(|e| StoreError::Query(e.to_string()))
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn insert(&self, new_post: Post) -> Result<Post, StoreError> {
        let model: post::ActiveModel = new_post.into();
        model
            .insert(&self.db)
            .await
            .map(Into::into)
            .map_err(|e| StoreError::Query(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Post, StoreError> {
        self.fetch(id).await.map(Into::into)
    }

    async fn search(
        &self,
        term: &str,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Post>, u64), StoreError> {
        let matching = self.matching(term).await?;
        let total = matching.len() as u64;
        Ok((text::paginate(matching, page, page_size), total))
    }

    async fn count(&self, term: &str) -> Result<u64, StoreError> {
        Ok(self.matching(term).await?.len() as u64)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError> {
        let mut merged: Post = self.fetch(id).await?.into();
        patch.apply(&mut merged);
        validate_post(&merged).map_err(StoreError::Invalid)?;
        merged.updated_at = Utc::now();
        self.persist(merged).await
    }

    async fn record_view(&self, id: Uuid) -> Result<Post, StoreError> {
        let mut post: Post = self.fetch(id).await?.into();
        post.view_count += 1;
        post.updated_at = Utc::now();
        self.persist(post).await
    }

    async fn set_active(&self, id: Uuid, active: bool) -> Result<Post, StoreError> {
        let mut post: Post = self.fetch(id).await?.into();
        post.active = active;
        post.updated_at = Utc::now();
        self.persist(post).await
    }

    async fn delete_permanently(&self, id: Uuid) -> Result<(), StoreError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
