use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Extension, Json, Router,
};
use serde_json::{json, Value};

use fintrack_core::categories::{Category, CategoryInput};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn list_categories(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Category>>> {
    let categories = state.category_service.list_categories(user.id())?;
    Ok(Json(categories))
}

async fn create_category(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CategoryInput>,
) -> ApiResult<Json<Category>> {
    let category = state
        .category_service
        .create_category(user.id(), payload)
        .await?;
    Ok(Json(category))
}

async fn delete_category(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Value>> {
    state.category_service.delete_category(user.id(), &id).await?;
    Ok(Json(json!({ "message": "Category deleted" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route("/categories/{id}", delete(delete_category))
}
