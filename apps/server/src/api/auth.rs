//! Registration, login and the caller's own profile.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};

use fintrack_core::users::{validate_password, NewUser, ProfileUpdate, UserProfile, UserSummary};
use fintrack_core::utils::non_blank;

use crate::{
    auth::{AuthError, CurrentUser},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
struct AuthResponse {
    token: String,
    user: UserSummary,
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (Some(name), Some(email), Some(password)) = (
        non_blank(payload.name.as_deref()),
        non_blank(payload.email.as_deref()),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    };
    validate_password(&password)?;

    let password_hash = state.auth.hash_password(&password)?;
    let user = state
        .user_service
        .register(NewUser {
            name,
            email,
            password_hash,
        })
        .await?;

    let token = state.auth.issue_token(&user.id)?;
    Ok(Json(AuthResponse {
        token,
        user: UserSummary::from(&user),
    }))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (Some(email), Some(password)) = (
        non_blank(payload.email.as_deref()),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::BadRequest(
            "Email and password required".to_string(),
        ));
    };

    let user = state
        .user_service
        .find_by_email(&email)?
        .ok_or(AuthError::InvalidCredentials)?;
    state.auth.verify_password(&user.password_hash, &password)?;

    let token = state.auth.issue_token(&user.id)?;
    tracing::info!("User {} logged in", user.id);
    Ok(Json(AuthResponse {
        token,
        user: UserSummary::from(&user),
    }))
}

async fn get_me(Extension(user): Extension<CurrentUser>) -> Json<UserProfile> {
    Json(UserProfile::from(&user.0))
}

async fn update_me(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(update): Json<ProfileUpdate>,
) -> ApiResult<Json<UserProfile>> {
    let updated = state.user_service.update_profile(user.id(), update).await?;
    Ok(Json(UserProfile::from(&updated)))
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(get_me).put(update_me))
}
