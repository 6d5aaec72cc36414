use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use fintrack_core::dashboard::DashboardStats;

use crate::{auth::CurrentUser, error::ApiResult, main_lib::AppState};

async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<DashboardStats>> {
    let stats = state.dashboard_service.get_dashboard(user.id())?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
