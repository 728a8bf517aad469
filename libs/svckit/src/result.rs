//! Result alias for HTTP handlers.

use crate::api::problem::Problem;

/// Standard result type for handlers.
///
/// Any error implementing `Into<Problem>` converts through `?`, and
/// `Problem` renders itself as an `application/problem+json` response.
pub type ApiResult<T = ()> = Result<T, Problem>;
