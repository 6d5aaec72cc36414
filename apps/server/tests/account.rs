mod common;

use axum::http::{Method, StatusCode};
use common::{today, TestApp};
use serde_json::json;

#[tokio::test]
async fn change_password_verifies_old_one() {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;

    let (status, body) = app
        .post(
            "/api/users/change-password",
            &token,
            json!({ "oldPassword": "wrong-one", "newPassword": "secret2" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid old password");

    let (status, body) = app
        .post(
            "/api/users/change-password",
            &token,
            json!({ "oldPassword": "secret1", "newPassword": "secret2" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password changed successfully");
    assert!(body["token"].is_string());

    let login = |password: &'static str| {
        app.send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "ada@example.com", "password": password })),
        )
    };
    assert_eq!(login("secret1").await.0, StatusCode::UNAUTHORIZED);
    assert_eq!(login("secret2").await.0, StatusCode::OK);
}

#[tokio::test]
async fn delete_account_requires_token_and_password() {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;
    app.register("Bob", "bob@example.com", "secret1").await;

    let (status, _) = app
        .send(
            Method::POST,
            "/api/users/delete-account",
            None,
            Some(json!({ "email": "ada@example.com", "password": "secret1" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .post(
            "/api/users/delete-account",
            &token,
            json!({ "email": "bob@example.com", "password": "secret1" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            "/api/users/delete-account",
            &token,
            json!({ "email": "ada@example.com", "password": "nope-nope" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid password");
}

#[tokio::test]
async fn deleting_account_removes_owned_data() {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;
    let food = app.category(&token, "Food", "EXPENSE").await;
    app.post(
        "/api/transactions",
        &token,
        json!({
            "amount": 20,
            "type": "EXPENSE",
            "description": "Pizza",
            "date": today(),
            "categoryId": food,
        }),
    )
    .await;

    let (status, body) = app
        .post(
            "/api/users/delete-account",
            &token,
            json!({ "email": "ada@example.com", "password": "secret1" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Account deleted successfully");

    // the old token no longer resolves to a user
    let (status, body) = app.get("/api/transactions", &token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User not found");

    // a fresh account with the same email starts empty
    let token = app.register("Ada", "ada@example.com", "secret1").await;
    let (_, transactions) = app.get("/api/transactions", &token).await;
    assert!(transactions.as_array().unwrap().is_empty());
    let (_, categories) = app.get("/api/categories", &token).await;
    assert!(categories.as_array().unwrap().is_empty());
}
