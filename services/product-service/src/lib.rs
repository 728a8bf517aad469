//! Product service: a small catalog of named, priced products served over
//! `/api/products`.

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

use crate::domain::service::ProductsService;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmProductsRepository;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "product-service",
    about: "Product catalog microservice",
    default_port: 8080,
    default_dsn: "sqlite://products.db?mode=rwc",
};

/// Runs migrations and assembles the full router over `db`.
///
/// # Errors
/// Returns an error if the schema migration fails.
pub async fn build_app(db: DbHandle) -> anyhow::Result<Router> {
    Migrator::up(db.conn(), None).await?;
    let repo = Arc::new(SeaOrmProductsRepository::new(db));
    Ok(router(Arc::new(ProductsService::new(repo))))
}

#[must_use]
pub fn router(service: Arc<ProductsService>) -> Router {
    api::rest::routes::router(service)
        .merge(svckit::api::web::docs_router(api::rest::routes::ApiDoc::openapi()))
        .merge(svckit::api::web::health_router(SERVICE.name))
}
