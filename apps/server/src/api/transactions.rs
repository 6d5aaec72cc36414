use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Extension, Json, Router,
};
use serde_json::{json, Value};

use fintrack_core::transactions::{TransactionInput, TransactionWithCategory};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn list_transactions(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<TransactionWithCategory>>> {
    let transactions = state.transaction_service.list_transactions(user.id())?;
    Ok(Json(transactions))
}

async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<TransactionInput>,
) -> ApiResult<Json<TransactionWithCategory>> {
    let created = state
        .transaction_service
        .create_transaction(user.id(), payload)
        .await?;
    Ok(Json(created))
}

async fn delete_transaction(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Value>> {
    state
        .transaction_service
        .delete_transaction(user.id(), &id)
        .await?;
    Ok(Json(json!({ "message": "Transaction deleted" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route("/transactions/{id}", delete(delete_transaction))
}
