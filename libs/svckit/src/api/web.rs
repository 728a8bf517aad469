//! Documentation and health endpoints shared by every service.

use std::sync::Arc;

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use time::OffsetDateTime;
use utoipa::openapi::OpenApi;

pub const OPENAPI_PATH: &str = "/swagger/openapi.json";

const SWAGGER_UI: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <title>API documentation</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
    <script>
      window.onload = () => {
        window.ui = SwaggerUIBundle({ url: "/swagger/openapi.json", dom_id: "#swagger-ui" });
      };
    </script>
  </body>
</html>
"##;

/// Serves the generated document and a Swagger UI page under `/swagger`.
pub fn docs_router(doc: OpenApi) -> Router {
    let doc = Arc::new(doc);
    Router::new()
        .route(
            OPENAPI_PATH,
            get(move || {
                let doc = Arc::clone(&doc);
                async move {
                    ([(header::CACHE_CONTROL, "no-store")], Json(doc.as_ref())).into_response()
                }
            }),
        )
        .route("/swagger", get(swagger_ui))
        .route("/swagger/index.html", get(swagger_ui))
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    service: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

/// `/health` (JSON) and `/healthz` (plain `ok`).
pub fn health_router(service: &'static str) -> Router {
    Router::new()
        .route(
            "/health",
            get(move || async move {
                Json(Health {
                    status: "healthy",
                    service,
                    timestamp: OffsetDateTime::now_utc(),
                })
            }),
        )
        .route("/healthz", get(|| async { "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use utoipa::OpenApi as _;

    #[derive(utoipa::OpenApi)]
    #[openapi(info(title = "sample", version = "1.0.0"))]
    struct SampleDoc;

    async fn get_body(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let headers = resp.headers().clone();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, bytes.to_vec())
    }

    #[tokio::test]
    async fn serves_openapi_document_uncached() {
        let (status, headers, body) =
            get_body(docs_router(SampleDoc::openapi()), OPENAPI_PATH).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["info"]["title"], "sample");
    }

    #[tokio::test]
    async fn serves_swagger_ui_page() {
        let (status, _, body) = get_body(docs_router(SampleDoc::openapi()), "/swagger").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("SwaggerUIBundle"));
    }

    #[tokio::test]
    async fn health_endpoints() {
        let (status, _, body) = get_body(health_router("orders"), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["status"], "healthy");
        assert_eq!(v["service"], "orders");

        let (status, _, body) = get_body(health_router("orders"), "/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }
}
