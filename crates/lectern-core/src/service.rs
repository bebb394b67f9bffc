//! Post service - domain policy on top of the post store.
//!
//! The store persists and searches documents; this layer decides what the
//! rest of the system is allowed to see: soft-deleted posts disappear from
//! every public read path, reads increment the view counter, and writes go
//! through the validation/derivation pipeline first.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostInput, PostPatch};
use crate::error::DomainError;
use crate::ports::PostStore;

/// One page of listing/search results plus the pagination envelope.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_posts: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u64,
}

/// Application logic over the post store.
///
/// Pagination inputs are trusted here; the API layer clamps `page_size` to
/// [1, 50] before calling in.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// List active posts, or search them when `term` is non-empty.
    pub async fn list_or_search(
        &self,
        term: &str,
        page: u64,
        page_size: u64,
    ) -> Result<PostPage, DomainError> {
        let (posts, total) = self.store.search(term, page, page_size).await?;
        let total_pages = total.div_ceil(page_size);

        Ok(PostPage {
            posts,
            current_page: page,
            total_pages,
            total_posts: total,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
            limit: page_size,
        })
    }

    /// Fetch a single post for display. Soft-deleted posts are
    /// indistinguishable from missing ones on this path. On success the view
    /// counter is incremented and persisted before the post is returned.
    pub async fn get_for_reading(&self, id: Uuid) -> Result<Post, DomainError> {
        let post = self.store.find_by_id(id).await?;
        if !post.active {
            return Err(DomainError::NotFound);
        }
        Ok(self.store.record_view(id).await?)
    }

    /// Validate, derive and persist a new post.
    pub async fn create(&self, input: PostInput) -> Result<Post, DomainError> {
        let input = input.validated().map_err(DomainError::Validation)?;
        Ok(self.store.insert(Post::new(input)).await?)
    }

    /// Partial update. Soft-deleted posts can still be edited; the store
    /// re-validates the merged document.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        Ok(self.store.update(id, patch.trimmed()).await?)
    }

    /// Hide the post from all public read paths. Idempotent in effect, but
    /// the post must exist.
    pub async fn soft_delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.set_active(id, false).await?;
        Ok(())
    }

    /// Make a soft-deleted post visible again.
    pub async fn restore(&self, id: Uuid) -> Result<Post, DomainError> {
        Ok(self.store.set_active(id, true).await?)
    }

    /// Remove the post permanently. Not recoverable.
    pub async fn hard_delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.delete_permanently(id).await?;
        Ok(())
    }
}
