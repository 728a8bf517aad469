//! Order service: create, list, fetch, update and delete orders over
//! `/api/orders`.

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

use crate::domain::service::OrdersService;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmOrdersRepository;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "order-service",
    about: "Order management microservice",
    default_port: 8081,
    default_dsn: "sqlite://orders.db?mode=rwc",
};

/// Runs migrations and assembles the full router over `db`.
///
/// # Errors
/// Returns an error if the schema migration fails.
pub async fn build_app(db: DbHandle) -> anyhow::Result<Router> {
    Migrator::up(db.conn(), None).await?;
    let repo = Arc::new(SeaOrmOrdersRepository::new(db));
    Ok(router(Arc::new(OrdersService::new(repo))))
}

/// REST routes plus documentation and health endpoints.
#[must_use]
pub fn router(service: Arc<OrdersService>) -> Router {
    api::rest::routes::router(service)
        .merge(svckit::api::web::docs_router(api::rest::routes::ApiDoc::openapi()))
        .merge(svckit::api::web::health_router(SERVICE.name))
}
