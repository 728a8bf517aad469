use serde::{Deserialize, Serialize};
use svckit::validation::one_of;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::model::{Payment, PaymentDraft, PaymentStatus, PaymentUpdate, UnknownStatus};

/// REST representation of a payment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentDto {
    pub id: Uuid,
    pub order_id: String,
    pub user_id: String,
    pub amount: f64,
    pub status: PaymentStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of `POST /api/payments`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreatePaymentReq {
    #[validate(length(min = 1, message = "is required"))]
    pub order_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub user_id: String,
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    /// Defaults to `pending`.
    #[serde(default)]
    #[validate(custom(function = "validate_payment_status"))]
    #[schema(value_type = Option<PaymentStatus>)]
    pub status: Option<String>,
}

/// Body of `PUT /api/payments/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdatePaymentReq {
    #[validate(range(exclusive_min = 0.0))]
    pub amount: f64,
    #[validate(custom(function = "validate_payment_status"))]
    #[schema(value_type = PaymentStatus)]
    pub status: String,
}

fn validate_payment_status(status: &str) -> Result<(), ValidationError> {
    one_of(status, &PaymentStatus::VALUES)
}

impl From<Payment> for PaymentDto {
    fn from(p: Payment) -> Self {
        Self {
            id: p.id,
            order_id: p.order_id,
            user_id: p.user_id,
            amount: p.amount,
            status: p.status,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl TryFrom<CreatePaymentReq> for PaymentDraft {
    type Error = UnknownStatus;

    fn try_from(req: CreatePaymentReq) -> Result<Self, Self::Error> {
        Ok(Self {
            status: req.status.as_deref().map(str::parse).transpose()?,
            order_id: req.order_id,
            user_id: req.user_id,
            amount: req.amount,
        })
    }
}

impl TryFrom<UpdatePaymentReq> for PaymentUpdate {
    type Error = UnknownStatus;

    fn try_from(req: UpdatePaymentReq) -> Result<Self, Self::Error> {
        Ok(Self {
            amount: req.amount,
            status: req.status.parse()?,
        })
    }
}
