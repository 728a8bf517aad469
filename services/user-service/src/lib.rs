//! User service: user accounts over `/api/users`.

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

use crate::domain::service::UsersService;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmUsersRepository;

pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "user-service",
    about: "User account microservice",
    default_port: 8082,
    default_dsn: "sqlite://users.db?mode=rwc",
};

/// Runs migrations and assembles the full router over `db`.
///
/// # Errors
/// Returns an error if the schema migration fails.
pub async fn build_app(db: DbHandle) -> anyhow::Result<Router> {
    Migrator::up(db.conn(), None).await?;
    let repo = Arc::new(SeaOrmUsersRepository::new(db));
    Ok(router(Arc::new(UsersService::new(repo))))
}

#[must_use]
pub fn router(service: Arc<UsersService>) -> Router {
    api::rest::routes::router(service)
        .merge(svckit::api::web::docs_router(api::rest::routes::ApiDoc::openapi()))
        .merge(svckit::api::web::health_router(SERVICE.name))
}
