#![allow(clippy::unwrap_used, clippy::expect_used)]

mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::{app, send};

#[tokio::test]
async fn short_name_is_rejected() {
    let app = app().await;
    let reply = send(
        &app,
        "POST",
        "/api/products",
        Some(&json!({"name": "ab", "description": "A real product", "price": 3.5})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "VALIDATION_FAILED");
    assert_eq!(reply.body["errors"][0]["field"], "name");

    let listed = send(&app, "GET", "/api/products", None).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn every_violation_is_reported() {
    let app = app().await;
    let reply = send(
        &app,
        "POST",
        "/api/products",
        Some(&json!({"name": "ab", "description": "tiny", "price": -1.0})),
    )
    .await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    let fields: Vec<_> = reply.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(fields, ["description", "name", "price"]);
}

#[tokio::test]
async fn create_get_update_delete() {
    let app = app().await;
    let body = json!({"name": "Desk lamp", "description": "Warm white LED lamp", "price": 24.5});
    let created = send(&app, "POST", "/api/products", Some(&body)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["price"], 24.5);
    let id = created.body["id"].as_str().unwrap().to_owned();
    let path = format!("/api/products/{id}");

    let fetched = send(&app, "GET", &path, None).await;
    assert_eq!(fetched.body, created.body);

    let change = json!({"name": "Floor lamp", "description": "Tall dimmable lamp", "price": 80.0});
    let updated = send(&app, "PUT", &path, Some(&change)).await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["name"], "Floor lamp");
    assert_eq!(updated.body["created_at"], created.body["created_at"]);

    let zero_price =
        json!({"name": "Floor lamp", "description": "Tall dimmable lamp", "price": 0.0});
    let rejected = send(&app, "PUT", &path, Some(&zero_price)).await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);

    assert_eq!(send(&app, "DELETE", &path, None).await.status, StatusCode::NO_CONTENT);
    let gone = send(&app, "GET", &path, None).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["code"], "PRODUCT_NOT_FOUND");
    assert_eq!(gone.body["instance"], path);
}

#[tokio::test]
async fn malformed_id_is_400() {
    let app = app().await;
    let reply = send(&app, "DELETE", "/api/products/42", None).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.body["code"], "PRODUCT_INVALID_ID");
}

#[tokio::test]
async fn openapi_lists_product_routes() {
    let app = app().await;
    let doc = send(&app, "GET", "/swagger/openapi.json", None).await;
    assert_eq!(doc.body["info"]["title"], "Product Service API");
    assert!(doc.body["paths"]["/api/products/{id}"]["put"].is_object());
    assert!(doc.body["components"]["schemas"]["ProductReq"].is_object());
}

#[tokio::test]
async fn client_supplied_id_is_ignored() {
    let app = app().await;
    let chosen = uuid::Uuid::now_v7().to_string();
    let body = json!({
        "id": chosen,
        "name": "Desk lamp",
        "description": "Warm white LED",
        "price": 9.5,
    });
    let created = send(&app, "POST", "/api/products", Some(&body)).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_ne!(created.body["id"], chosen.as_str());
}
