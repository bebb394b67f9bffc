//! Authentication stub.
//!
//! A single configured account, a real password hash, and nothing else: no
//! token is issued and no middleware protects the mutating post routes. The
//! insecurity is inherited from the original design and kept deliberate.

use actix_web::{HttpResponse, web};

use lectern_shared::ApiResponse;
use lectern_shared::dto::{LoginRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let email = req.email.trim().to_lowercase();
    if email != state.admin.email || !state.admin.active {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    let valid = state
        .passwords
        .verify(&req.password, &state.admin_password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    state.session.login(state.admin.as_ref()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        UserResponse::from(state.admin.as_ref()),
        "Login successful",
    )))
}

/// GET /api/auth/me
pub async fn me(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    match state.session.user().await {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::ok(UserResponse::from(&user)))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// POST /api/auth/logout
pub async fn logout(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.session.logout().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::message_only("Logout successful")))
}
