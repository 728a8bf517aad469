//! Payment service: records payments against orders over `/api/payments`.
//!
//! Updates run inside a single transaction so the returned document is the
//! one the update produced.

pub mod api;
pub mod domain;
pub mod errors;
pub mod infra;

use std::sync::Arc;

use axum::Router;
use sea_orm_migration::MigratorTrait;
use svckit::bootstrap::ServiceSpec;
use svckit::db::DbHandle;
use utoipa::OpenApi;

use crate::domain::service::PaymentsService;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmPaymentsRepository;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "payment-service",
    about: "Payment tracking microservice",
    default_port: 8084,
    default_dsn: "sqlite://payments.db?mode=rwc",
};

/// Runs migrations and assembles the full router over `db`.
///
/// # Errors
/// Returns an error if the schema migration fails.
pub async fn build_app(db: DbHandle) -> anyhow::Result<Router> {
    Migrator::up(db.conn(), None).await?;
    let repo = Arc::new(SeaOrmPaymentsRepository::new(db));
    Ok(router(Arc::new(PaymentsService::new(repo))))
}

#[must_use]
pub fn router(service: Arc<PaymentsService>) -> Router {
    api::rest::routes::router(service)
        .merge(svckit::api::web::docs_router(api::rest::routes::ApiDoc::openapi()))
        .merge(svckit::api::web::health_router(SERVICE.name))
}
