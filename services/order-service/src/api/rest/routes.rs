use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use svckit::{Problem, ValidationViolation};
use utoipa::OpenApi;

use super::dto::{CreateOrderReq, OrderDto, UpdateOrderReq};
use super::handlers;
use crate::domain::model::OrderStatus;
use crate::domain::service::OrdersService;

#[derive(OpenApi)]
#[openapi(
    info(title = "Order Service API", description = "CRUD operations over orders"),
    paths(
        handlers::create_order,
        handlers::list_orders,
        handlers::get_order,
        handlers::update_order,
        handlers::delete_order,
    ),
    components(schemas(
        OrderDto,
        CreateOrderReq,
        UpdateOrderReq,
        OrderStatus,
        Problem,
        ValidationViolation,
    )),
    tags((name = "orders", description = "Order management"))
)]
pub struct ApiDoc;

#[must_use]
pub fn router(service: Arc<OrdersService>) -> Router {
    Router::new()
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(handlers::get_order)
                .put(handlers::update_order)
                .delete(handlers::delete_order),
        )
        .layer(Extension(service))
}
