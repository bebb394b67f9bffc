//! Post endpoints.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use lectern_core::domain::{PostInput, PostPatch};
use lectern_shared::ApiResponse;
use lectern_shared::dto::{
    CreatePostRequest, ListPostsQuery, PostListData, UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: u64 = 10;
const MAX_PAGE_SIZE: u64 = 50;

/// A malformed id is reported as "not found" rather than "bad request",
/// matching the original API's behavior for unparseable identifiers.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

fn parse_pagination(query: &ListPostsQuery) -> AppResult<(u64, u64)> {
    let page = query.page.unwrap_or(1);
    if page < 1 {
        return Err(AppError::BadRequest(
            "Page must be an integer greater than 0".to_string(),
        ));
    }

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    if limit < 1 {
        return Err(AppError::BadRequest(
            "Limit must be an integer greater than 0".to_string(),
        ));
    }

    Ok((page, limit.min(MAX_PAGE_SIZE)))
}

/// GET /api/posts?page&limit&q
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let (page, limit) = parse_pagination(&query)?;
    let term = query.q.as_deref().unwrap_or_default().trim().to_string();

    let results = state.posts.list_or_search(&term, page, limit).await?;
    let message = if term.is_empty() {
        format!("{} posts in total", results.total_posts)
    } else {
        format!("Found {} posts for \"{}\"", results.total_posts, term)
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        PostListData::from_page(results, None),
        message,
    )))
}

/// GET /api/posts/search?q&page&limit - like `list`, but `q` is required.
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let term = match query.q.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => term.to_string(),
        _ => {
            return Err(AppError::BadRequest(
                "Search parameter \"q\" is required".to_string(),
            ));
        }
    };
    let (page, limit) = parse_pagination(&query)?;

    let results = state.posts.list_or_search(&term, page, limit).await?;
    let message = format!("Found {} posts for \"{}\"", results.total_posts, term);

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        PostListData::from_page(results, Some(term)),
        message,
    )))
}

/// GET /api/posts/{id} - fetch one post and count the view.
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.get_for_reading(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(post, "Post retrieved")))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = PostInput {
        title: req.title,
        content: req.content,
        author: req.author,
        summary: req.summary,
        tags: req.tags,
    };

    let post = state.posts.create(input).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(post, "Post created")))
}

/// PUT /api/posts/{id} - partial update.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: req.author,
        summary: req.summary,
        tags: req.tags,
    };

    let post = state.posts.update(id, patch).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(post, "Post updated")))
}

/// DELETE /api/posts/{id} - soft delete.
pub async fn soft_delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.soft_delete(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message_only("Post deleted")))
}

/// DELETE /api/posts/{id}/force - permanent delete.
pub async fn force_delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    state.posts.hard_delete(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message_only("Post permanently deleted")))
}

/// PATCH /api/posts/{id}/restore
pub async fn restore(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state.posts.restore(id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(post, "Post restored")))
}
