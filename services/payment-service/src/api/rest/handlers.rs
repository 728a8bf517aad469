use std::sync::Arc;

use axum::Extension;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use svckit::api::prelude::*;

use super::dto::{CreatePaymentReq, PaymentDto, UpdatePaymentReq};
use super::error::{domain_error_to_problem, unknown_status_to_problem};
use crate::domain::error::DomainError;
use crate::domain::model::{PaymentDraft, PaymentUpdate};
use crate::domain::service::PaymentsService;

fn at(uri: &Uri) -> impl Fn(DomainError) -> Problem + '_ {
    move |e| domain_error_to_problem(&e, uri.path())
}

/// Create a payment
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = CreatePaymentReq,
    responses(
        (status = 201, description = "Payment created", body = PaymentDto),
        (status = 400, description = "Malformed body or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_payment(
    uri: Uri,
    Extension(svc): Extension<Arc<PaymentsService>>,
    ValidatedJson(req): ValidatedJson<CreatePaymentReq>,
) -> ApiResult<Response> {
    let draft = PaymentDraft::try_from(req)
        .map_err(|e| unknown_status_to_problem(&e, uri.path()))?;
    let payment = svc.create_payment(draft).await.map_err(at(&uri))?;
    let id = payment.id.to_string();
    Ok(created_json(PaymentDto::from(payment), &uri, &id).into_response())
}

/// List all payments
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    responses(
        (status = 200, description = "Every stored payment", body = [PaymentDto]),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_payments(
    uri: Uri,
    Extension(svc): Extension<Arc<PaymentsService>>,
) -> ApiResult<JsonBody<Vec<PaymentDto>>> {
    let payments = svc.list_payments().await.map_err(at(&uri))?;
    Ok(Json(payments.into_iter().map(PaymentDto::from).collect()))
}

/// Get a payment by id
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "payments",
    params(("id" = String, Path, description = "Payment id (UUID)")),
    responses(
        (status = 200, description = "The payment", body = PaymentDto),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such payment", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(payment.id = %id))]
pub async fn get_payment(
    uri: Uri,
    Extension(svc): Extension<Arc<PaymentsService>>,
    Path(id): Path<String>,
) -> ApiResult<JsonBody<PaymentDto>> {
    let payment = svc
        .get_payment(&id)
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(PaymentDto::from(payment)))
}

/// Update a payment's amount and status
#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    tag = "payments",
    params(("id" = String, Path, description = "Payment id (UUID)")),
    request_body = UpdatePaymentReq,
    responses(
        (status = 200, description = "The updated payment", body = PaymentDto),
        (status = 400, description = "Malformed id or body, or failed validation", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such payment", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(payment.id = %id))]
pub async fn update_payment(
    uri: Uri,
    Extension(svc): Extension<Arc<PaymentsService>>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdatePaymentReq>,
) -> ApiResult<JsonBody<PaymentDto>> {
    let update = PaymentUpdate::try_from(req)
        .map_err(|e| unknown_status_to_problem(&e, uri.path()))?;
    let payment = svc
        .update_payment(&id, update)
        .await
        .map_err(at(&uri))?
        .ok_or_else(|| at(&uri)(DomainError::not_found(&id)))?;
    Ok(Json(PaymentDto::from(payment)))
}

/// Delete a payment
#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    tag = "payments",
    params(("id" = String, Path, description = "Payment id (UUID)")),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 400, description = "Malformed id", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "No such payment", body = Problem, content_type = "application/problem+json"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json"),
    )
)]
#[tracing::instrument(skip_all, fields(payment.id = %id))]
pub async fn delete_payment(
    uri: Uri,
    Extension(svc): Extension<Arc<PaymentsService>>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    svc.delete_payment(&id).await.map_err(at(&uri))?;
    Ok(no_content().into_response())
}
