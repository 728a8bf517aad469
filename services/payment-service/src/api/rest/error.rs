use svckit::api::catalog::current_trace_id;
use svckit::api::extract::VALIDATION_FAILED;
use svckit::{Problem, ValidationViolation};

use crate::domain::error::DomainError;
use crate::domain::model::{PaymentStatus, UnknownStatus};
use crate::errors::{PAYMENT_INTERNAL_DATABASE, PAYMENT_INVALID_ID, PAYMENT_NOT_FOUND};

/// Map a domain error to an RFC 9457 problem.
#[must_use]
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        DomainError::InvalidId { id } => PAYMENT_INVALID_ID.with_context(
            format!("'{id}' is not a valid payment id"),
            instance,
            trace_id,
        ),
        DomainError::NotFound { id } => PAYMENT_NOT_FOUND.with_context(
            format!("Payment with id {id} was not found"),
            instance,
            trace_id,
        ),
        DomainError::Database { .. } => {
            // Log the details, never expose them
            tracing::error!(error = ?e, "Database error occurred");
            PAYMENT_INTERNAL_DATABASE.with_context(
                "An internal database error occurred",
                instance,
                trace_id,
            )
        }
    }
}

/// Only reachable if a status slipped past request validation.
#[must_use]
pub fn unknown_status_to_problem(e: &UnknownStatus, instance: &str) -> Problem {
    VALIDATION_FAILED
        .with_context(e.to_string(), instance, current_trace_id())
        .with_errors(vec![ValidationViolation {
            field: "status".to_owned(),
            message: format!("must be one of: {}", PaymentStatus::VALUES.join(", ")),
            code: Some("oneof".to_owned()),
        }])
}
