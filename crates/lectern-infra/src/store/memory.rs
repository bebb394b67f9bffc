//! In-memory post store - the default when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use lectern_core::domain::{Post, PostPatch, validate_post};
use lectern_core::error::StoreError;
use lectern_core::ports::PostStore;

use super::text;

/// Post store backed by a HashMap behind an async RwLock.
///
/// Every operation touches a single document under the lock, which gives the
/// per-document atomicity the service expects. Data is lost on restart.
pub struct MemoryPostStore {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    /// Active posts, newest first.
    async fn active_posts(&self) -> Vec<Post> {
        let posts = self.posts.read().await;
        let mut active: Vec<Post> = posts.values().filter(|p| p.active).cloned().collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        active
    }

    /// Active posts matching `term`, ranked; all active posts when the term
    /// is blank.
    async fn matching(&self, term: &str) -> Vec<Post> {
        let active = self.active_posts().await;
        if term.trim().is_empty() {
            active
        } else {
            text::rank(active, term)
        }
    }
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        if posts.contains_key(&post.id) {
            return Err(StoreError::Duplicate(post.id.to_string()));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Post, StoreError> {
        let posts = self.posts.read().await;
        posts.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn search(
        &self,
        term: &str,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Post>, u64), StoreError> {
        let matching = self.matching(term).await;
        let total = matching.len() as u64;
        Ok((text::paginate(matching, page, page_size), total))
    }

    async fn count(&self, term: &str) -> Result<u64, StoreError> {
        Ok(self.matching(term).await.len() as u64)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let current = posts.get(&id).ok_or(StoreError::NotFound)?;

        let mut merged = current.clone();
        patch.apply(&mut merged);
        validate_post(&merged).map_err(StoreError::Invalid)?;
        merged.updated_at = Utc::now();

        posts.insert(id, merged.clone());
        Ok(merged)
    }

    async fn record_view(&self, id: Uuid) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(StoreError::NotFound)?;
        post.view_count += 1;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn set_active(&self, id: Uuid, active: bool) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(StoreError::NotFound)?;
        post.active = active;
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete_permanently(&self, id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
