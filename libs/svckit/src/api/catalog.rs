//! Static error definitions.
//!
//! Each service lists its errors once as `ErrDef` constants and the REST
//! error mapping turns them into [`Problem`]s.

use http::StatusCode;

use super::problem::Problem;

#[derive(Debug, Clone, Copy)]
pub struct ErrDef {
    pub status: u16,
    pub title: &'static str,
    pub code: &'static str,
    pub type_url: &'static str,
}

impl ErrDef {
    pub fn as_problem(&self, detail: impl Into<String>) -> Problem {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Problem::new(status, self.title, detail)
            .with_code(self.code)
            .with_type(self.type_url)
    }

    /// Problem for one concrete request.
    pub fn with_context(
        &self,
        detail: impl Into<String>,
        instance: &str,
        trace_id: Option<String>,
    ) -> Problem {
        let problem = self.as_problem(detail).with_instance(instance);
        match trace_id {
            Some(id) => problem.with_trace_id(id),
            None => problem,
        }
    }
}

/// Trace id of the current span, if the request is being traced.
#[must_use]
pub fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}
