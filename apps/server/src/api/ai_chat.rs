//! AI chat relay endpoints.
//!
//! Upstream failures are reported in-band: the response is 200 with
//! `success: false`. Only malformed requests get a 400.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;

use fintrack_ai::{ChatMessage, ChatReply};

use crate::main_lib::AppState;

type ChatResponse = (StatusCode, Json<ChatReply>);

fn bad_request(message: &str) -> ChatResponse {
    (StatusCode::BAD_REQUEST, Json(ChatReply::failed(message)))
}

/// POST /api/ai/chat
async fn chat(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> ChatResponse {
    let messages = body
        .get("messages")
        .cloned()
        .and_then(|m| serde_json::from_value::<Vec<ChatMessage>>(m).ok())
        .filter(|m| !m.is_empty());
    let Some(messages) = messages else {
        return bad_request("Messages array is required");
    };

    let reply = state.chat_service.chat(&messages).await;
    (StatusCode::OK, Json(reply))
}

/// POST /api/ai/advice
async fn advice(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> ChatResponse {
    let Some(context) = body
        .get("context")
        .and_then(Value::as_str)
        .filter(|c| !c.trim().is_empty())
    else {
        return bad_request("Context is required");
    };

    let reply = state.chat_service.advice(context).await;
    (StatusCode::OK, Json(reply))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ai/chat", post(chat))
        .route("/ai/advice", post(advice))
}
