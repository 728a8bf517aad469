#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests of `/api/orders` over an in-memory database.

mod support;

use axum::http::{StatusCode, header};
use serde_json::json;
use support::{app, send};

fn valid_order() -> serde_json::Value {
    json!({"customer_id": "c1", "product_id": "p1", "quantity": 2, "status": "pending"})
}

#[tokio::test]
async fn order_lifecycle_scenario() {
    let app = app().await;

    let created = send(&app, "POST", "/api/orders", Some(&valid_order())).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_str().unwrap().to_owned();
    assert!(!id.is_empty());
    assert_eq!(created.body["created_at"], created.body["updated_at"]);
    assert_eq!(
        created.headers.get(header::LOCATION).unwrap(),
        &format!("/api/orders/{id}")
    );

    let fetched = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body, created.body);

    let bad_update =
        json!({"customer_id": "c1", "product_id": "p1", "quantity": 0, "status": "pending"});
    let rejected = send(&app, "PUT", &format!("/api/orders/{id}"), Some(&bad_update)).await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["code"], "VALIDATION_FAILED");
    assert_eq!(rejected.body["errors"][0]["field"], "quantity");

    let first = send(&app, "DELETE", &format!("/api/orders/{id}"), None).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);
    let second = send(&app, "DELETE", &format!("/api/orders/{id}"), None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(second.body["code"], "ORDER_NOT_FOUND");
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_created_at() {
    let app = app().await;
    let created = send(&app, "POST", "/api/orders", Some(&valid_order())).await;
    let id = created.body["id"].as_str().unwrap().to_owned();

    let update =
        json!({"customer_id": "c2", "product_id": "p9", "quantity": 7, "status": "shipped"});
    let updated = send(&app, "PUT", &format!("/api/orders/{id}"), Some(&update)).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["id"], created.body["id"]);
    assert_eq!(updated.body["customer_id"], "c2");
    assert_eq!(updated.body["quantity"], 7);
    assert_eq!(updated.body["status"], "shipped");
    assert_eq!(updated.body["created_at"], created.body["created_at"]);

    let created_at = time::OffsetDateTime::parse(
        created.body["updated_at"].as_str().unwrap(),
        &time::format_description::well_known::Rfc3339,
    )
    .unwrap();
    let updated_at = time::OffsetDateTime::parse(
        updated.body["updated_at"].as_str().unwrap(),
        &time::format_description::well_known::Rfc3339,
    )
    .unwrap();
    assert!(updated_at >= created_at);

    let fetched = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(fetched.body, updated.body);
}

#[tokio::test]
async fn out_of_enum_status_is_rejected_before_storage() {
    let app = app().await;
    let created = send(&app, "POST", "/api/orders", Some(&valid_order())).await;
    let id = created.body["id"].as_str().unwrap().to_owned();

    let update =
        json!({"customer_id": "c1", "product_id": "p1", "quantity": 2, "status": "cancelled"});
    let rejected = send(&app, "PUT", &format!("/api/orders/{id}"), Some(&update)).await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["errors"][0]["field"], "status");
    assert_eq!(rejected.body["errors"][0]["code"], "oneof");

    let fetched = send(&app, "GET", &format!("/api/orders/{id}"), None).await;
    assert_eq!(fetched.body["status"], "pending");
}

#[tokio::test]
async fn list_returns_every_order() {
    let app = app().await;
    let empty = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, json!([]));

    for _ in 0..3 {
        send(&app, "POST", "/api/orders", Some(&valid_order())).await;
    }
    let all = send(&app, "GET", "/api/orders", None).await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn malformed_body_is_400() {
    let app = app().await;
    let reply = send(&app, "POST", "/api/orders", Some(&json!({"customer_id": "c1"}))).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "INVALID_BODY");
    assert_eq!(
        reply.headers.get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
}

#[tokio::test]
async fn bad_and_unknown_ids() {
    let app = app().await;
    let bad = send(&app, "GET", "/api/orders/not-a-uuid", None).await;
    assert_eq!(bad.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad.body["code"], "ORDER_INVALID_ID");
    assert_eq!(bad.body["instance"], "/api/orders/not-a-uuid");

    let unknown = uuid::Uuid::now_v7();
    let missing = send(&app, "GET", &format!("/api/orders/{unknown}"), None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let update = send(&app, "PUT", &format!("/api/orders/{unknown}"), Some(&valid_order())).await;
    assert_eq!(update.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn docs_and_health_are_served() {
    let app = app().await;
    let doc = send(&app, "GET", "/swagger/openapi.json", None).await;
    assert_eq!(doc.status, StatusCode::OK);
    assert!(doc.body["paths"]["/api/orders"].is_object());
    assert!(doc.body["paths"]["/api/orders/{id}"]["delete"].is_object());

    let health = send(&app, "GET", "/health", None).await;
    assert_eq!(health.body["service"], "order-service");
}

#[tokio::test]
async fn client_supplied_id_and_timestamps_are_ignored() {
    let app = app().await;
    let chosen = uuid::Uuid::now_v7().to_string();
    let mut body = valid_order();
    body["id"] = json!(chosen);
    body["created_at"] = json!("2001-01-01T00:00:00Z");

    let created = send(&app, "POST", "/api/orders", Some(&body)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_ne!(created.body["id"], chosen.as_str());
    assert_ne!(created.body["created_at"], "2001-01-01T00:00:00Z");

    let at_chosen = send(&app, "GET", &format!("/api/orders/{chosen}"), None).await;
    assert_eq!(at_chosen.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn padded_id_is_not_a_valid_id() {
    let app = app().await;
    let created = send(&app, "POST", "/api/orders", Some(&valid_order())).await;
    let id = created.body["id"].as_str().unwrap();

    let reply = send(&app, "GET", &format!("/api/orders/%20{id}%20"), None).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "ORDER_INVALID_ID");
}
