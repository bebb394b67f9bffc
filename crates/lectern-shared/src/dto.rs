//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use lectern_core::domain::{Post, User};
use lectern_core::service::PostPage;

/// Request to create a post. Same shape as [`lectern_core::domain::PostInput`]
/// on the wire; validation happens in the service, not here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Query parameters accepted by the listing and search endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub q: Option<String>,
}

/// Pagination metadata returned alongside list results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_posts: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub limit: u64,
}

/// Payload of the listing and search endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListData {
    pub posts: Vec<Post>,
    pub pagination: Pagination,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl PostListData {
    pub fn from_page(page: PostPage, search_term: Option<String>) -> Self {
        Self {
            pagination: Pagination {
                current_page: page.current_page,
                total_pages: page.total_pages,
                total_posts: page.total_posts,
                has_next_page: page.has_next_page,
                has_prev_page: page.has_prev_page,
                limit: page.limit,
            },
            posts: page.posts,
            search_term,
        }
    }
}

/// Request to login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an author account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: match user.role {
                lectern_core::domain::Role::Professor => "professor".to_string(),
                lectern_core::domain::Role::Admin => "admin".to_string(),
            },
        }
    }
}
