use svckit::Problem;
use svckit::api::catalog::current_trace_id;

use crate::domain::error::DomainError;
use crate::errors::{PRODUCT_INTERNAL_DATABASE, PRODUCT_INVALID_ID, PRODUCT_NOT_FOUND};

/// Map a domain error to an RFC 9457 problem.
#[must_use]
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        DomainError::InvalidId { id } => PRODUCT_INVALID_ID.with_context(
            format!("'{id}' is not a valid product id"),
            instance,
            trace_id,
        ),
        DomainError::NotFound { id } => PRODUCT_NOT_FOUND.with_context(
            format!("Product with id {id} was not found"),
            instance,
            trace_id,
        ),
        DomainError::Database { .. } => {
            tracing::error!(error = ?e, "Database error occurred");
            PRODUCT_INTERNAL_DATABASE.with_context(
                "An internal database error occurred",
                instance,
                trace_id,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn maps_each_variant() {
        let cases = [
            (DomainError::InvalidId { id: "x".to_owned() }, StatusCode::BAD_REQUEST),
            (DomainError::not_found("x"), StatusCode::NOT_FOUND),
            (DomainError::database("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            let p = domain_error_to_problem(&err, "/api/products/x");
            assert_eq!(p.status, status);
            assert!(p.code.starts_with("PRODUCT_"));
            assert!(!p.detail.contains("boom"));
        }
    }
}
