mod common;

use axum::http::StatusCode;
use common::{today, TestApp};
use serde_json::json;

#[tokio::test]
async fn created_transaction_is_listed_newest_first() {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;
    let food = app.category(&token, "Food", "EXPENSE").await;

    let (status, older) = app
        .post(
            "/api/transactions",
            &token,
            json!({
                "amount": "12.25",
                "type": "EXPENSE",
                "description": "Lunch",
                "date": "2024-01-15",
                "categoryId": food,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{older}");
    assert_eq!(older["amount"], 12.25);
    assert_eq!(older["type"], "EXPENSE");
    assert_eq!(older["category"]["name"], "Food");

    let (status, newer) = app
        .post(
            "/api/transactions",
            &token,
            json!({
                "amount": 40,
                "type": "EXPENSE",
                "description": "Groceries",
                "date": today(),
                "categoryId": food,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, list) = app.get("/api/transactions", &token).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], newer["id"]);
    assert_eq!(list[1]["id"], older["id"]);
    assert_eq!(list[1]["category"]["color"], "#F59E0B");
}

#[tokio::test]
async fn create_rejects_bad_input() {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "secret1").await;
    let other = app.register("Bob", "bob@example.com", "secret1").await;
    let food = app.category(&token, "Food", "EXPENSE").await;
    let bobs = app.category(&other, "Rent", "EXPENSE").await;

    let base = json!({
        "amount": 10,
        "type": "EXPENSE",
        "description": "Snack",
        "date": today(),
        "categoryId": food,
    });

    let mut missing = base.clone();
    missing.as_object_mut().unwrap().remove("description");
    let (status, body) = app.post("/api/transactions", &token, missing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");

    let mut foreign = base.clone();
    foreign["categoryId"] = json!(bobs);
    let (status, body) = app.post("/api/transactions", &token, foreign).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid category");

    let mut negative = base.clone();
    negative["amount"] = json!(-5);
    let (status, _) = app.post("/api/transactions", &token, negative).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.get("/api/transactions", &token).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn delete_is_owner_scoped() {
    let app = TestApp::new().await;
    let ada = app.register("Ada", "ada@example.com", "secret1").await;
    let bob = app.register("Bob", "bob@example.com", "secret1").await;
    let food = app.category(&ada, "Food", "EXPENSE").await;

    let (_, tx) = app
        .post(
            "/api/transactions",
            &ada,
            json!({
                "amount": 9.99,
                "type": "EXPENSE",
                "description": "Coffee",
                "date": today(),
                "categoryId": food,
            }),
        )
        .await;
    let uri = format!("/api/transactions/{}", tx["id"].as_str().unwrap());

    let (status, body) = app.delete(&uri, &bob).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Transaction not found");
    let (_, list) = app.get("/api/transactions", &ada).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = app.delete(&uri, &ada).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Transaction deleted");
    let (_, list) = app.get("/api/transactions", &ada).await;
    assert!(list.as_array().unwrap().is_empty());
}
