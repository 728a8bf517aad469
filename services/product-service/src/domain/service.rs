use std::sync::Arc;

use svckit::clock::timestamp_now;
use tracing::{debug, info};

use super::error::DomainError;
use super::model::{NewProduct, Product, ProductUpdate};
use super::repo::ProductsRepository;

pub struct ProductsService {
    repo: Arc<dyn ProductsRepository>,
}

impl ProductsService {
    #[must_use]
    pub fn new(repo: Arc<dyn ProductsRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<Product, DomainError> {
        let product = self.repo.create(new_product, timestamp_now()).await?;
        info!(product.id = %product.id, name = %product.name, "Created product");
        Ok(product)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.repo.find_all().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn update_product(
        &self,
        id: &str,
        update: ProductUpdate,
    ) -> Result<Option<Product>, DomainError> {
        let updated = self.repo.update(id, update, timestamp_now()).await?;
        if updated.is_some() {
            info!(product.id = %id, "Updated product");
        }
        Ok(updated)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn delete_product(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        info!(product.id = %id, "Deleted product");
        Ok(())
    }
}
