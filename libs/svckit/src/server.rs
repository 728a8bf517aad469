//! HTTP serving: shared middleware and graceful shutdown.

use axum::Router;
use axum::http::StatusCode;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Request id, tracing and timeout layers, outermost first.
///
/// A request still running after `request_timeout` is answered with
/// 504 Gateway Timeout.
#[must_use]
pub fn with_middleware(router: Router, cfg: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::GATEWAY_TIMEOUT,
                cfg.request_timeout,
            )),
    )
}

/// Binds `cfg.host:cfg.port` and serves `router` until `cancel` fires.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(
    router: Router,
    cfg: &ServerConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let app = with_middleware(router, cfg);
    let listener = TcpListener::bind((cfg.host.as_str(), cfg.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}
