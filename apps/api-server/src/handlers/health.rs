//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub uptime: u64,
}

/// GET /api/health - liveness probe with process uptime in seconds.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse {
        success: true,
        message: "API is up and running",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: state.started_at.elapsed().as_secs(),
    };

    HttpResponse::Ok().json(response)
}
