//! Shared plumbing for the commerce microservices.
//!
//! Every service binary is a thin `main` over [`bootstrap::run`]; every
//! service library builds its router from the pieces in [`api`] and talks to
//! its database through a [`db::DbHandle`].

pub mod api;
pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod db;
pub mod ids;
pub mod logging;
pub mod result;
pub mod server;
pub mod signals;
pub mod validation;

pub use api::problem::{Problem, ValidationViolation};
pub use result::ApiResult;
