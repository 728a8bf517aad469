use svckit::ids::InvalidId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid product id: '{id}'")]
    InvalidId { id: String },

    #[error("Product not found: {id}")]
    NotFound { id: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<InvalidId> for DomainError {
    fn from(e: InvalidId) -> Self {
        Self::InvalidId { id: e.raw }
    }
}
