use std::sync::Arc;

use axum::Extension;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use svckit::api::prelude::*;

use super::dto::{ProductDto, ProductReq};
use super::error::domain_error_to_problem;
use crate::domain::error::DomainError;
use crate::domain::service::ProductsService;

fn at(uri: &Uri) -> impl Fn(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

/// Create a product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductReq,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Malformed body or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    uri: Uri,
    Extension(svc): Extension<Arc<ProductsService>>,
    ValidatedJson(req): ValidatedJson<ProductReq>,
) -> ApiResult<Response> {
    let product = svc.create_product(req.into()).await.map_err(at(&uri))?;
    let id = product.id.to_string();
    Ok(created_json(ProductDto::from(product), &uri, &id).into_response())
}

/// List all products
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "Every stored product", body = [ProductDto]),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(
    uri: Uri,
    Extension(svc): Extension<Arc<ProductsService>>,
) -> ApiResult<JsonBody<Vec<ProductDto>>> {
    let products = svc.list_products().await.map_err(at(&uri))?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such product", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(product.id = %id))]
pub async fn get_product(
    uri: Uri,
    Extension(svc): Extension<Arc<ProductsService>>,
    Path(id): Path<String>,
) -> ApiResult<JsonBody<ProductDto>> {
    let product = svc
        .get_product(&id)
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(ProductDto::from(product)))
}

/// Replace a product's fields
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id (UUID)")),
    request_body = ProductReq,
    responses(
        (status = 200, description = "The updated product", body = ProductDto),
        (status = 400, description = "Malformed id or body, or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such product", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(product.id = %id))]
pub async fn update_product(
    uri: Uri,
    Extension(svc): Extension<Arc<ProductsService>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<ProductReq>,
) -> ApiResult<JsonBody<ProductDto>> {
    let product = svc
        .update_product(&id, req.into())
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(ProductDto::from(product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = String, Path, description = "Product id (UUID)")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such product", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(product.id = %id))]
pub async fn delete_product(
    uri: Uri,
    Extension(svc): Extension<Arc<ProductsService>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    svc.delete_product(&id).await.map_err(at(&uri))?;
    Ok(no_content().into_response())
}
