use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use svckit::{Problem, ValidationViolation};
use utoipa::OpenApi;

use super::dto::{CreatePaymentReq, PaymentDto, UpdatePaymentReq};
use super::handlers;
use crate::domain::model::PaymentStatus;
use crate::domain::service::PaymentsService;

#[derive(OpenApi)]
#[openapi(
    info(title = "Payment Service API", description = "CRUD operations over payments"),
    paths(
        handlers::create_payment,
        handlers::list_payments,
        handlers::get_payment,
        handlers::update_payment,
        handlers::delete_payment,
    ),
    components(schemas(
        PaymentDto,
        CreatePaymentReq,
        UpdatePaymentReq,
        PaymentStatus,
        Problem,
        ValidationViolation,
    )),
    tags((name = "payments", description = "Payment tracking"))
)]
pub struct ApiDoc;

#[must_use]
pub fn router(service: Arc<PaymentsService>) -> Router {
    Router::new()
        .route(
            "/api/payments",
            get(handlers::list_payments).post(handlers::create_payment),
        )
        .route(
            "/api/payments/{id}",
            get(handlers::get_payment)
                .put(handlers::update_payment)
                .delete(handlers::delete_payment),
        )
        .layer(Extension(service))
}
