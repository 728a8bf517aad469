use std::sync::Arc;

use axum::Extension;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use svckit::api::prelude::*;

use super::dto::{UserDto, UserReq};
use super::error::domain_error_to_problem;
use crate::domain::error::DomainError;
use crate::domain::service::UsersService;

fn at(uri: &Uri) -> impl Fn(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserReq,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Malformed body or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_user(
    uri: Uri,
    Extension(svc): Extension<Arc<UsersService>>,
    ValidatedJson(req): ValidatedJson<UserReq>,
) -> ApiResult<Response> {
    let user = svc.create_user(req.into()).await.map_err(at(&uri))?;
    let id = user.id.to_string();
    Ok(created_json(UserDto::from(user), &uri, &id).into_response())
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "Every stored user", body = [UserDto]),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_users(
    uri: Uri,
    Extension(svc): Extension<Arc<UsersService>>,
) -> ApiResult<JsonBody<Vec<UserDto>>> {
    let users = svc.list_users().await.map_err(at(&uri))?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such user", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(user.id = %id))]
pub async fn get_user(
    uri: Uri,
    Extension(svc): Extension<Arc<UsersService>>,
    Path(id): Path<String>,
) -> ApiResult<JsonBody<UserDto>> {
    let user = svc
        .get_user(&id)
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(UserDto::from(user)))
}

/// Replace a user's fields
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    request_body = UserReq,
    responses(
        (status = 200, description = "The updated user", body = UserDto),
        (status = 400, description = "Malformed id or body, or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such user", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(user.id = %id))]
pub async fn update_user(
    uri: Uri,
    Extension(svc): Extension<Arc<UsersService>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UserReq>,
) -> ApiResult<JsonBody<UserDto>> {
    let user = svc
        .update_user(&id, req.into())
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(UserDto::from(user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such user", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(user.id = %id))]
pub async fn delete_user(
    uri: Uri,
    Extension(svc): Extension<Arc<UsersService>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    svc.delete_user(&id).await.map_err(at(&uri))?;
    Ok(no_content().into_response())
}
