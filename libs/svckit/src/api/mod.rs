pub mod catalog;
pub mod extract;
pub mod problem;
pub mod response;
pub mod web;

/// Everything a REST handler module usually needs.
pub mod prelude {
    pub use super::extract::ValidatedJson;
    pub use super::problem::Problem;
    pub use super::response::{JsonBody, created_json, no_content};
    pub use crate::result::ApiResult;
    pub use axum::{Json, http::Uri};
}
