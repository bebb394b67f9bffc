use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostPatch};
use crate::error::StoreError;

/// Post store port - durable persistence of post documents with exact-key
/// lookup and relevance-ranked free-text search over title, content and
/// summary.
///
/// The store does not filter by `active` on [`PostStore::find_by_id`]; that
/// policy belongs to the service. `search` and `count` only ever see active
/// posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist an already-validated post.
    async fn insert(&self, post: Post) -> Result<Post, StoreError>;

    /// Exact-key lookup, regardless of the `active` flag.
    async fn find_by_id(&self, id: Uuid) -> Result<Post, StoreError>;

    /// Active posts matching `term`, paginated, together with the total
    /// number of matches before pagination.
    ///
    /// An empty term returns all active posts ordered by `created_at`
    /// descending. A non-empty term ranks by text relevance, ties broken by
    /// `created_at` descending. Offset pagination: skip
    /// `(page - 1) * page_size`, take `page_size`.
    async fn search(
        &self,
        term: &str,
        page: u64,
        page_size: u64,
    ) -> Result<(Vec<Post>, u64), StoreError>;

    /// Number of active posts matching `term`.
    async fn count(&self, term: &str) -> Result<u64, StoreError>;

    /// Merge the provided fields, re-validate the merged document, and
    /// refresh `updated_at`.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, StoreError>;

    /// Add one to `view_count` and persist it. Plain read-modify-write:
    /// concurrent increments on the same post may lose updates, which is
    /// acceptable for view tracking.
    async fn record_view(&self, id: Uuid) -> Result<Post, StoreError>;

    /// Toggle the soft-delete flag only.
    async fn set_active(&self, id: Uuid, active: bool) -> Result<Post, StoreError>;

    /// Remove the document entirely. Fails with `NotFound` if already absent.
    async fn delete_permanently(&self, id: Uuid) -> Result<(), StoreError>;
}
