use svckit::Problem;
use svckit::api::catalog::current_trace_id;

use crate::domain::error::DomainError;
use crate::errors::{USER_INTERNAL_DATABASE, USER_INVALID_ID, USER_NOT_FOUND};

/// Map a domain error to an RFC 9457 problem.
#[must_use]
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        DomainError::InvalidId { id } => USER_INVALID_ID.with_context(
            format!("'{id}' is not a valid user id"),
            instance,
            trace_id,
        ),
        DomainError::NotFound { id } => USER_NOT_FOUND.with_context(
            format!("User with id {id} was not found"),
            instance,
            trace_id,
        ),
        DomainError::Database { .. } => {
            tracing::error!(error = ?e, "Database error occurred");
            USER_INTERNAL_DATABASE.with_context(
                "An internal database error occurred",
                instance,
                trace_id,
            )
        }
    }
}
