#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

use fintrack_ai::CompletionClient;
use fintrack_server::{
    api::app_router, build_state, build_state_with_client, config::Config, AppState,
};

pub const SECRET: &str = "fintrack-test-secret-0123456789abcdef";

pub struct TestApp {
    router: Router,
    pub state: Arc<AppState>,
    _dir: TempDir,
}

fn test_config(dir: &TempDir) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        (
            "FT_DB_PATH",
            dir.path().join("test.db").to_string_lossy().to_string(),
        ),
        ("FT_JWT_SECRET", SECRET.to_string()),
    ]);
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempdir().unwrap();
        let config = test_config(&dir);
        let state = build_state(&config).await.unwrap();
        Self {
            router: app_router(state.clone(), &config),
            state,
            _dir: dir,
        }
    }

    pub async fn with_ai_client(client: Arc<dyn CompletionClient>) -> Self {
        let dir = tempdir().unwrap();
        let config = test_config(&dir);
        let state = build_state_with_client(&config, client).await.unwrap();
        Self {
            router: app_router(state.clone(), &config),
            state,
            _dir: dir,
        }
    }

    /// Sends a request and returns the status with the decoded JSON body
    /// (`Value::Null` when the body is empty or not JSON).
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, Some(token), None).await
    }

    /// Logs in and returns the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/login",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Registers a user and returns their bearer token.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/auth/register",
                None,
                Some(json!({ "name": name, "email": email, "password": password })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Creates a category and returns its id.
    pub async fn category(&self, token: &str, name: &str, kind: &str) -> String {
        let (status, body) = self
            .post(
                "/api/categories",
                token,
                json!({ "name": name, "color": "#F59E0B", "type": kind }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "category failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }
}

pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
