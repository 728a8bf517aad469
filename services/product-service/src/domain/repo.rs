use async_trait::async_trait;
use time::OffsetDateTime;

use super::error::DomainError;
use super::model::{NewProduct, Product, ProductUpdate};

/// Persistence port for products.
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    async fn create(
        &self,
        product: NewProduct,
        stamped_at: OffsetDateTime,
    ) -> Result<Product, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// `Ok(None)` when no product has this id.
    async fn update(
        &self,
        id: &str,
        update: ProductUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Product>, DomainError>;

    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
