//! Glue between `validator` derives and problem bodies.

use std::borrow::Cow;

use serde_json::Value;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::api::problem::ValidationViolation;

/// Membership check behind `oneof` style enumerations.
///
/// Use from a `#[validate(custom(function = "..."))]` wrapper that supplies the
/// allowed values.
///
/// # Errors
/// Returns a `oneof` validation error when `value` is not in `allowed`.
pub fn one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    let mut err = ValidationError::new("oneof");
    err.message = Some(Cow::Owned(format!(
        "must be one of: {}",
        allowed.join(", ")
    )));
    err.add_param(Cow::Borrowed("value"), &value);
    Err(err)
}

/// Flattens `validator` output into sorted, field-addressed violations.
#[must_use]
pub fn violations(errors: &ValidationErrors) -> Vec<ValidationViolation> {
    let mut out = Vec::new();
    collect("", errors, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    out
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<ValidationViolation>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                out.extend(list.iter().map(|err| ValidationViolation {
                    field: path.clone(),
                    message: describe(err),
                    code: Some(err.code.to_string()),
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (idx, inner) in items {
                    collect(&format!("{path}[{idx}]"), inner, out);
                }
            }
        }
    }
}

fn param(err: &ValidationError, name: &str) -> Option<String> {
    err.params.get(name).map(|v| match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Human-readable message for one failed rule.
#[must_use]
pub fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    let min = param(err, "min");
    let max = param(err, "max");
    match err.code.as_ref() {
        "length" => match (min, max) {
            (Some(min), Some(max)) => format!("length must be between {min} and {max} characters"),
            (Some(min), None) => format!("length must be at least {min} characters"),
            (None, Some(max)) => format!("length must be at most {max} characters"),
            (None, None) => "invalid length".to_owned(),
        },
        "range" => {
            if let Some(bound) = param(err, "exclusive_min") {
                return format!("must be greater than {bound}");
            }
            match (min, max) {
                (Some(min), Some(max)) => format!("must be between {min} and {max}"),
                (Some(min), None) => format!("must be at least {min}"),
                (None, Some(max)) => format!("must be at most {max}"),
                (None, None) => "out of range".to_owned(),
            }
        }
        "email" => "must be a valid email address".to_owned(),
        "required" => "is required".to_owned(),
        code => format!("failed '{code}' check"),
    }
}

/// One-line summary used as the problem `detail`.
#[must_use]
pub fn summary(violations: &[ValidationViolation]) -> String {
    let parts: Vec<String> = violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect();
    format!("Validation failed: {}", parts.join("; "))
}
