use std::sync::Arc;

use axum::Extension;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use svckit::api::prelude::*;
use tracing::info;

use super::dto::{CreateOrderReq, OrderDto, UpdateOrderReq};
use super::error::{domain_error_to_problem, unknown_status_to_problem};
use crate::domain::error::DomainError;
use crate::domain::model::{NewOrder, OrderUpdate};
use crate::domain::service::OrdersService;

fn at(uri: &Uri) -> impl Fn(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

/// Create an order
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "orders",
    request_body = CreateOrderReq,
    responses(
        (status = 201, description = "Order created", body = OrderDto),
        (status = 400, description = "Malformed body or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_order(
    uri: Uri,
    Extension(svc): Extension<Arc<OrdersService>>,
    ValidatedJson(req): ValidatedJson<CreateOrderReq>,
) -> ApiResult<Response> {
    let new_order = NewOrder::try_from(req)
        .map_err(|e| unknown_status_to_problem(&e, uri.path()))?;
    let order = svc.create_order(new_order).await.map_err(at(&uri))?;
    let id = order.id.to_string();
    Ok(created_json(OrderDto::from(order), &uri, &id).into_response())
}

/// List all orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    responses(
        (status = 200, description = "Every stored order", body = [OrderDto]),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_orders(
    uri: Uri,
    Extension(svc): Extension<Arc<OrdersService>>,
) -> ApiResult<JsonBody<Vec<OrderDto>>> {
    let orders = svc.list_orders().await.map_err(at(&uri))?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// Get an order by id
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = String, Path, description = "Order id (UUID)")),
    responses(
        (status = 200, description = "The order", body = OrderDto),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such order", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(order.id = %id))]
pub async fn get_order(
    uri: Uri,
    Extension(svc): Extension<Arc<OrdersService>>,
    Path(id): Path<String>,
) -> ApiResult<JsonBody<OrderDto>> {
    let order = svc
        .get_order(&id)
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(OrderDto::from(order)))
}

/// Replace an order's fields
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = String, Path, description = "Order id (UUID)")),
    request_body = UpdateOrderReq,
    responses(
        (status = 200, description = "The updated order", body = OrderDto),
        (status = 400, description = "Malformed id or body, or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such order", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(order.id = %id))]
pub async fn update_order(
    uri: Uri,
    Extension(svc): Extension<Arc<OrdersService>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateOrderReq>,
) -> ApiResult<JsonBody<OrderDto>> {
    info!(status = %req.status, quantity = req.quantity, "Updating order");
    let update = OrderUpdate::try_from(req)
        .map_err(|e| unknown_status_to_problem(&e, uri.path()))?;
    let order = svc
        .update_order(&id, update)
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(OrderDto::from(order)))
}

/// Delete an order
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "orders",
    params(("id" = String, Path, description = "Order id (UUID)")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such order", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(order.id = %id))]
pub async fn delete_order(
    uri: Uri,
    Extension(svc): Extension<Arc<OrdersService>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    svc.delete_order(&id).await.map_err(at(&uri))?;
    Ok(no_content().into_response())
}
