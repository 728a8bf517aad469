#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // not every test binary uses every helper

//! Shared helpers for product-service integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use svckit::config::DatabaseConfig;
use svckit::db::DbHandle;
use tower::ServiceExt;

use product_service::infra::storage::migrations::Migrator;

/// Fresh, private in-memory database.
pub async fn test_db() -> DbHandle {
    DbHandle::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory sqlite")
}

pub async fn migrated_db() -> DbHandle {
    let db = test_db().await;
    Migrator::up(db.conn(), None).await.expect("migrations");
    db
}

/// Full application router over a fresh database.
pub async fn app() -> Router {
    product_service::build_app(test_db().await).await.unwrap()
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&Value>) -> Reply {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(json).unwrap())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Reply {
        status,
        headers,
        body,
    }
}
