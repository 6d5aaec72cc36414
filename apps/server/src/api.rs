use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{auth::require_user, config::Config, main_lib::AppState};

mod ai_chat;
mod auth;
mod budgets;
mod categories;
mod dashboard;
mod goals;
mod health;
mod transactions;
mod users;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let public = Router::new()
        .merge(health::router())
        .merge(auth::public_router());

    let protected = Router::new()
        .merge(auth::router())
        .merge(users::router())
        .merge(transactions::router())
        .merge(categories::router())
        .merge(budgets::router())
        .merge(goals::router())
        .merge(dashboard::router())
        .merge(ai_chat::router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_user));

    Router::new()
        .nest("/api", public.merge(protected))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
