use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Extension, Json, Router,
};
use serde_json::{json, Value};

use fintrack_core::budgets::{BudgetInput, BudgetWithUsage};

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn list_budgets(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<BudgetWithUsage>>> {
    let budgets = state.budget_service.list_budgets(user.id())?;
    Ok(Json(budgets))
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<BudgetInput>,
) -> ApiResult<Json<BudgetWithUsage>> {
    let budget = state.budget_service.create_budget(user.id(), payload).await?;
    Ok(Json(budget))
}

async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Value>> {
    state.budget_service.delete_budget(user.id(), &id).await?;
    Ok(Json(json!({ "message": "Budget deleted" })))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/{id}", delete(delete_budget))
}
