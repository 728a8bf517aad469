use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use svckit::{Problem, ValidationViolation};
use utoipa::OpenApi;

use super::dto::{UserDto, UserReq};
use super::handlers;
use crate::domain::service::UsersService;

#[derive(OpenApi)]
#[openapi(
    info(title = "User Service API", description = "CRUD operations over user accounts"),
    paths(
        handlers::create_user,
        handlers::list_users,
        handlers::get_user,
        handlers::update_user,
        handlers::delete_user,
    ),
    components(schemas(UserDto, UserReq, Problem, ValidationViolation)),
    tags((name = "users", description = "User accounts"))
)]
pub struct ApiDoc;

#[must_use]
pub fn router(service: Arc<UsersService>) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .layer(Extension(service))
}
