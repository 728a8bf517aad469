#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{app, send};

#[tokio::test]
async fn create_defaults_status_to_pending() {
    let app = app().await;
    let created = send(
        &app,
        "POST",
        "/api/payments",
        Some(&json!({"order_id": "o1", "user_id": "u1", "amount": 49.9, "method": "card"})),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["status"], "pending");
    assert!(created.body.get("method").is_none());
}

#[tokio::test]
async fn update_changes_amount_and_status() {
    let app = app().await;
    let created = send(
        &app,
        "POST",
        "/api/payments",
        Some(&json!({"order_id": "o1", "user_id": "u1", "amount": 10.0, "status": "pending"})),
    )
    .await;
    let path = format!("/api/payments/{}", created.body["id"].as_str().unwrap());

    let updated = send(&app, "PUT", &path, Some(&json!({"amount": 12.5, "status": "paid"}))).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["amount"], 12.5);
    assert_eq!(updated.body["status"], "paid");
    assert_eq!(updated.body["order_id"], "o1");
    assert_eq!(updated.body["created_at"], created.body["created_at"]);

    let fetched = send(&app, "GET", &path, None).await;
    assert_eq!(fetched.body, updated.body);
}

#[tokio::test]
async fn update_requires_known_status() {
    let app = app().await;
    let created = send(
        &app,
        "POST",
        "/api/payments",
        Some(&json!({"order_id": "o1", "user_id": "u1", "amount": 10.0})),
    )
    .await;
    let path = format!("/api/payments/{}", created.body["id"].as_str().unwrap());

    let missing = send(&app, "PUT", &path, Some(&json!({"amount": 5.0}))).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["code"], "INVALID_BODY");

    let body = json!({"amount": 5.0, "status": "refunded"});
    let unknown = send(&app, "PUT", &path, Some(&body)).await;
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown.body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn create_validation() {
    let app = app().await;
    let reply = send(
        &app,
        "POST",
        "/api/payments",
        Some(&json!({"order_id": "", "user_id": "u1", "amount": 0.0})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let errors = reply.body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "amount");
    assert_eq!(errors[1]["field"], "order_id");
}

#[tokio::test]
async fn update_of_unknown_payment_is_404() {
    let app = app().await;
    let path = format!("/api/payments/{}", uuid::Uuid::now_v7());
    let reply = send(&app, "PUT", &path, Some(&json!({"amount": 5.0, "status": "paid"}))).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.body["code"], "PAYMENT_NOT_FOUND");

    // the rolled-back transaction must leave the connection usable
    let list = send(&app, "GET", "/api/payments", None).await;
    assert_eq!(list.status, StatusCode::OK);
}

#[tokio::test]
async fn delete_twice_then_not_found() {
    let app = app().await;
    let created = send(
        &app,
        "POST",
        "/api/payments",
        Some(&json!({"order_id": "o1", "user_id": "u1", "amount": 10.0})),
    )
    .await;
    let path = format!("/api/payments/{}", created.body["id"].as_str().unwrap());

    assert_eq!(send(&app, "DELETE", &path, None).await.status, StatusCode::NO_CONTENT);
    let again = send(&app, "DELETE", &path, None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["code"], "PAYMENT_NOT_FOUND");
    assert_eq!(send(&app, "GET", &path, None).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_ids_are_400() {
    let app = app().await;
    for method in ["GET", "DELETE"] {
        let reply = send(&app, method, "/api/payments/not-a-uuid", None).await;
        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "{method}");
        assert_eq!(reply.body["code"], "PAYMENT_INVALID_ID");
        assert_eq!(reply.body["instance"], "/api/payments/not-a-uuid");
    }
}

#[tokio::test]
async fn client_supplied_id_is_ignored() {
    let app = app().await;
    let chosen = uuid::Uuid::now_v7().to_string();
    let created = send(
        &app,
        "POST",
        "/api/payments",
        Some(&json!({"id": chosen, "order_id": "o1", "user_id": "u1", "amount": 3.0})),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_ne!(created.body["id"], chosen.as_str());
    let at_chosen = send(&app, "GET", &format!("/api/payments/{chosen}"), None).await;
    assert_eq!(at_chosen.status, StatusCode::NOT_FOUND);
}
