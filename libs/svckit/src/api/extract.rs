//! JSON body extractor that also runs `validator` rules.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::catalog::{ErrDef, current_trace_id};
use super::problem::Problem;
use crate::validation::{summary, violations};

pub const INVALID_BODY: ErrDef = ErrDef {
    status: 400,
    title: "Invalid Request Body",
    code: "INVALID_BODY",
    type_url: "https://errors.commerce.dev/INVALID_BODY",
};

pub const VALIDATION_FAILED: ErrDef = ErrDef {
    status: 400,
    title: "Validation Failed",
    code: "VALIDATION_FAILED",
    type_url: "https://errors.commerce.dev/VALIDATION_FAILED",
};

/// Like `axum::Json`, but rejects with a 400 problem on malformed bodies and on
/// any failed `#[validate]` rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_owned();
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| invalid_body(&rejection, &instance))?;
        value
            .validate()
            .map_err(|errors| validation_failed(&errors, &instance))?;
        Ok(Self(value))
    }
}

fn invalid_body(rejection: &JsonRejection, instance: &str) -> Problem {
    tracing::debug!(error = %rejection, "rejected request body");
    INVALID_BODY.with_context(rejection.body_text(), instance, current_trace_id())
}

/// Problem for a failed `validator` run.
#[must_use]
pub fn validation_failed(errors: &ValidationErrors, instance: &str) -> Problem {
    let list = violations(errors);
    VALIDATION_FAILED
        .with_context(summary(&list), instance, current_trace_id())
        .with_errors(list)
}
