//! End-to-end tests for the post endpoints against the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use api_server::config::AdminConfig;
use api_server::handlers::configure_routes;
use api_server::middleware::error::{json_error_handler, query_error_handler};
use api_server::state::AppState;
use lectern_infra::MemoryPostStore;

fn test_state() -> AppState {
    let admin = AdminConfig {
        email: "professor@example.com".to_string(),
        name: "Professor".to_string(),
        password: "professor123".to_string(),
    };
    AppState::with_store(Arc::new(MemoryPostStore::new()), &admin).unwrap()
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .configure(configure_routes),
        )
        .await
    };
}

/// Create a post through the API and return its `data` payload.
macro_rules! create_post {
    ($app:expr, $payload:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json($payload)
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["data"].clone()
    }};
}

macro_rules! get_json {
    ($app:expr, $uri:expr) => {{
        let req = test::TestRequest::get().uri($uri).to_request();
        let resp = test::call_service($app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn valid_post(title: &str) -> Value {
    json!({
        "title": title,
        "content": "a body that is long enough to pass validation",
        "author": "Ada Lovelace"
    })
}

#[actix_web::test]
async fn listing_an_empty_store() {
    let app = test_app!();

    let (status, body) = get_json!(&app, "/api/posts");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["posts"], json!([]));
    assert_eq!(body["data"]["pagination"]["totalPosts"], 0);
}

#[actix_web::test]
async fn listing_returns_created_posts() {
    let app = test_app!();
    create_post!(&app, valid_post("Post one"));
    create_post!(&app, valid_post("Post two"));

    let (status, body) = get_json!(&app, "/api/posts");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"]["pagination"]["totalPosts"], 2);
    // Newest first.
    assert_eq!(body["data"]["posts"][0]["title"], "Post two");
}

#[actix_web::test]
async fn creating_a_post_with_valid_data() {
    let app = test_app!();

    let data = create_post!(
        &app,
        json!({
            "title": "A new post",
            "content": "this is the content of the new post",
            "author": "Ada Lovelace",
            "tags": ["Tech", " programming "]
        })
    );

    assert_eq!(data["title"], "A new post");
    assert_eq!(data["author"], "Ada Lovelace");
    assert_eq!(data["tags"], json!(["tech", "programming"]));
    assert_eq!(data["viewCount"], 0);
    assert_eq!(data["active"], true);
    // Summary derived from content when omitted.
    assert_eq!(data["summary"], "this is the content of the new post");
}

#[actix_web::test]
async fn creating_a_post_without_title_fails() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({
            "title": "",
            "content": "content without a title",
            "author": "Ada Lovelace"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid data");
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn title_length_boundary() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(valid_post("ab"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    create_post!(&app, valid_post("abc"));
}

#[actix_web::test]
async fn fetching_a_post_increments_views() {
    let app = test_app!();
    let data = create_post!(&app, valid_post("Counted post"));
    let id = data["id"].as_str().unwrap().to_string();

    let (status, body) = get_json!(&app, &format!("/api/posts/{id}"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["viewCount"], 1);

    let (_, body) = get_json!(&app, &format!("/api/posts/{id}"));
    assert_eq!(body["data"]["viewCount"], 2);
}

#[actix_web::test]
async fn fetching_missing_or_malformed_ids_is_404() {
    let app = test_app!();

    let (status, body) = get_json!(
        &app,
        &format!("/api/posts/{}", uuid::Uuid::new_v4())
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Post not found");

    // A malformed id maps to 404, not 400.
    let (status, _) = get_json!(&app, "/api/posts/not-a-uuid");
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn updating_merges_only_provided_fields() {
    let app = test_app!();
    let data = create_post!(
        &app,
        json!({
            "title": "Original title",
            "content": "the original content of this post",
            "author": "Ada Lovelace"
        })
    );
    let id = data["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({"title": "Updated title"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["title"], "Updated title");
    assert_eq!(body["data"]["content"], "the original content of this post");
}

#[actix_web::test]
async fn updating_a_missing_post_is_404() {
    let app = test_app!();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
        .set_json(json!({"title": "Whatever"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn summary_stays_stale_after_content_edit() {
    // Known quirk kept from the original: the summary is derived at creation
    // only, never re-derived on update.
    let app = test_app!();
    let data = create_post!(
        &app,
        json!({
            "title": "Quirky post",
            "content": "the first version of the content",
            "author": "Ada Lovelace"
        })
    );
    let id = data["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{id}"))
        .set_json(json!({"content": "a completely rewritten content body"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["data"]["content"], "a completely rewritten content body");
    assert_eq!(body["data"]["summary"], "the first version of the content");
}

#[actix_web::test]
async fn soft_delete_hides_and_restore_reveals() {
    let app = test_app!();
    let data = create_post!(&app, valid_post("Disappearing post"));
    let id = data["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Gone from the public read paths.
    let (status, _) = get_json!(&app, &format!("/api/posts/{id}"));
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, body) = get_json!(&app, "/api/posts");
    assert_eq!(body["data"]["pagination"]["totalPosts"], 0);

    // Restore brings it back.
    let req = test::TestRequest::patch()
        .uri(&format!("/api/posts/{id}/restore"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["active"], true);

    let (status, _) = get_json!(&app, &format!("/api/posts/{id}"));
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn force_delete_is_permanent() {
    let app = test_app!();
    let data = create_post!(&app, valid_post("Doomed post"));
    let id = data["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}/force"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Not restorable, not fetchable, not re-deletable.
    let req = test::TestRequest::patch()
        .uri(&format!("/api/posts/{id}/restore"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{id}/force"))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[actix_web::test]
async fn searching_finds_matching_posts() {
    let app = test_app!();
    create_post!(
        &app,
        json!({
            "title": "Advanced JavaScript",
            "content": "learn advanced JavaScript patterns",
            "author": "Joao"
        })
    );
    create_post!(
        &app,
        json!({
            "title": "Python for Beginners",
            "content": "an introduction to Python",
            "author": "Maria"
        })
    );

    let (status, body) = get_json!(&app, "/api/posts/search?q=JavaScript");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["posts"][0]["title"], "Advanced JavaScript");
    assert_eq!(body["data"]["searchTerm"], "JavaScript");

    let (status, body) = get_json!(&app, "/api/posts/search?q=haskell");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["totalPosts"], 0);
}

#[actix_web::test]
async fn padded_query_term_is_trimmed_in_the_message() {
    let app = test_app!();
    create_post!(
        &app,
        json!({
            "title": "Rust notes",
            "content": "notes about rust programming",
            "author": "Ada Lovelace"
        })
    );

    let (status, body) = get_json!(&app, "/api/posts?q=%20%20rust%20");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Found 1 posts for \"rust\"");
}

#[actix_web::test]
async fn search_requires_a_term() {
    let app = test_app!();

    let (status, body) = get_json!(&app, "/api/posts/search");
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().contains("required"));
}

#[actix_web::test]
async fn middle_page_of_three_posts() {
    let app = test_app!();
    create_post!(&app, valid_post("First post"));
    create_post!(&app, valid_post("Second post"));
    create_post!(&app, valid_post("Third post"));

    let (status, body) = get_json!(&app, "/api/posts?page=2&limit=1");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["posts"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["posts"][0]["title"], "Second post");
    assert_eq!(body["data"]["pagination"]["hasNextPage"], true);
    assert_eq!(body["data"]["pagination"]["hasPrevPage"], true);
    assert_eq!(body["data"]["pagination"]["totalPages"], 3);
}

#[actix_web::test]
async fn invalid_query_parameters_are_400() {
    let app = test_app!();

    let (status, _) = get_json!(&app, "/api/posts?page=0");
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json!(&app, "/api/posts?limit=abc");
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn oversized_limit_is_clamped() {
    let app = test_app!();
    create_post!(&app, valid_post("Single post"));

    let (status, body) = get_json!(&app, "/api/posts?limit=500");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["limit"], 50);
}

#[actix_web::test]
async fn health_reports_uptime() {
    let app = test_app!();

    let (status, body) = get_json!(&app, "/api/health");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["timestamp"].as_str().is_some());
    assert!(body["uptime"].as_u64().is_some());
}
