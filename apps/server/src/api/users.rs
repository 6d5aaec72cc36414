//! Account maintenance for the signed-in user.

use std::sync::Arc;

use axum::{extract::State, routing::post, Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use fintrack_core::users::{normalize_email, validate_password};

use crate::{
    auth::{AuthError, CurrentUser},
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    old_password: Option<String>,
    new_password: Option<String>,
}

#[derive(Serialize)]
struct ChangePasswordResponse {
    message: &'static str,
    token: String,
}

#[derive(Deserialize)]
struct DeleteAccountRequest {
    email: Option<String>,
    password: Option<String>,
}

async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ChangePasswordRequest>,
) -> ApiResult<Json<ChangePasswordResponse>> {
    let (Some(old_password), Some(new_password)) = (
        payload.old_password.filter(|p| !p.is_empty()),
        payload.new_password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::BadRequest(
            "Old and new passwords are required".to_string(),
        ));
    };

    match state.auth.verify_password(&user.0.password_hash, &old_password) {
        Ok(()) => {}
        Err(AuthError::InvalidCredentials) => {
            return Err(ApiError::BadRequest("Invalid old password".to_string()))
        }
        Err(other) => return Err(other.into()),
    }
    validate_password(&new_password)?;

    let password_hash = state.auth.hash_password(&new_password)?;
    state
        .user_service
        .change_password(user.id(), password_hash)
        .await?;

    let token = state.auth.issue_token(user.id())?;
    tracing::info!("User {} changed their password", user.id());
    Ok(Json(ChangePasswordResponse {
        message: "Password changed successfully",
        token,
    }))
}

async fn delete_account(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<DeleteAccountRequest>,
) -> ApiResult<Json<Value>> {
    let password = payload
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Password is required".to_string()))?;
    let email = payload
        .email
        .map(|e| normalize_email(&e))
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Email is required".to_string()))?;

    if email != user.0.email {
        return Err(ApiError::BadRequest(
            "Email does not match the signed-in account".to_string(),
        ));
    }
    match state.auth.verify_password(&user.0.password_hash, &password) {
        Ok(()) => {}
        Err(AuthError::InvalidCredentials) => {
            return Err(ApiError::Auth("Invalid password".to_string()))
        }
        Err(other) => return Err(other.into()),
    }

    state.user_service.delete_user(user.id()).await?;
    Ok(Json(json!({ "message": "Account deleted successfully" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/change-password", post(change_password))
        .route("/users/delete-account", post(delete_account))
}
