//! RFC 9457 problem details, the single error body every service returns.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Media type of every error body.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

mod status_code {
    use http::StatusCode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // serde hands us &T
    pub(super) fn serialize<S: Serializer>(status: &StatusCode, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u16(status.as_u16())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<StatusCode, D::Error> {
        let raw = u16::deserialize(d)?;
        StatusCode::from_u16(raw).map_err(serde::de::Error::custom)
    }
}

/// Problem details body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(title = "Problem", description = "RFC 9457 problem details")]
#[must_use]
pub struct Problem {
    /// URI reference identifying the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// Short summary of the problem type.
    pub title: String,
    /// HTTP status, serialized as a number.
    #[serde(with = "status_code")]
    #[schema(value_type = u16)]
    pub status: StatusCode,
    /// Explanation specific to this occurrence.
    pub detail: String,
    /// Request path the problem occurred on.
    pub instance: String,
    /// Machine-readable error code, e.g. `ORDER_NOT_FOUND`.
    pub code: String,
    pub trace_id: Option<String>,
    /// Field-level violations for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationViolation>>,
}

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationViolation {
    /// Field name as it appears in the request body.
    pub field: String,
    pub message: String,
    /// Name of the failed rule (`length`, `range`, `email`, `oneof`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_owned(),
            title: title.into(),
            status,
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
            trace_id: None,
            errors: None,
        }
    }

    pub fn with_type(mut self, type_url: impl Into<String>) -> Self {
        self.type_url = type_url.into();
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = instance.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<ValidationViolation>) -> Self {
        self.errors = Some(errors);
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status;
        let mut resp = axum::Json(self).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_status_and_problem_content_type() {
        let resp = Problem::new(
            StatusCode::BAD_REQUEST,
            "Bad Request",
            "quantity must be at least 1",
        )
        .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let ct = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(ct, APPLICATION_PROBLEM_JSON);
    }

    #[test]
    fn serializes_rfc_field_names() {
        let p = Problem::new(StatusCode::NOT_FOUND, "Not Found", "order 42 not found")
            .with_code("ORDER_NOT_FOUND")
            .with_instance("/api/orders/42");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["type"], "about:blank");
        assert_eq!(v["status"], 404);
        assert_eq!(v["code"], "ORDER_NOT_FOUND");
        assert_eq!(v["instance"], "/api/orders/42");
        assert!(v.get("errors").is_none());
    }

    #[test]
    fn violations_round_trip() {
        let p = Problem::new(StatusCode::BAD_REQUEST, "Bad Request", "invalid").with_errors(vec![
            ValidationViolation {
                field: "name".to_owned(),
                message: "too short".to_owned(),
                code: Some("length".to_owned()),
            },
        ]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, StatusCode::BAD_REQUEST);
        assert_eq!(back.errors.unwrap()[0].field, "name");
    }

    #[test]
    fn trace_id_is_carried() {
        let p = Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            "An internal database error occurred",
        )
        .with_trace_id("17");
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(p.trace_id.as_deref(), Some("17"));
    }
}
