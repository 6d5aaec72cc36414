use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fintrack_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

static DEV_ERRORS: AtomicBool = AtomicBool::new(false);

/// Includes internal error details in 500 bodies when enabled.
pub fn set_dev_errors(enabled: bool) {
    DEV_ERRORS.store(enabled, Ordering::Relaxed);
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) => match e {
                CoreError::Validation(_) | CoreError::ConstraintViolation(_) => {
                    StatusCode::BAD_REQUEST
                }
                CoreError::Database(DatabaseError::UniqueViolation(_)) => StatusCode::BAD_REQUEST,
                CoreError::NotFound(_) | CoreError::Database(DatabaseError::NotFound(_)) => {
                    StatusCode::NOT_FOUND
                }
                CoreError::Conflict(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
            ErrorBody {
                code: status.as_u16(),
                message: INTERNAL_MESSAGE.to_string(),
                details: DEV_ERRORS
                    .load(Ordering::Relaxed)
                    .then(|| self.to_string()),
            }
        } else {
            ErrorBody {
                code: status.as_u16(),
                message: self.to_string(),
                details: None,
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Auth("Invalid credentials".to_string()),
            AuthError::MissingToken => ApiError::Auth("Access token required".to_string()),
            AuthError::UnknownUser => ApiError::Auth("User not found".to_string()),
            AuthError::InvalidToken => ApiError::Auth("Invalid token".to_string()),
            AuthError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
