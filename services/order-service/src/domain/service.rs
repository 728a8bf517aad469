use std::sync::Arc;

use svckit::clock::timestamp_now;
use tracing::{debug, info};

use super::error::DomainError;
use super::model::{NewOrder, Order, OrderUpdate};
use super::repo::OrdersRepository;

/// Order use-cases: stamps timestamps and delegates storage to the repository.
pub struct OrdersService {
    repo: Arc<dyn OrdersRepository>,
}

impl OrdersService {
    #[must_use]
    pub fn new(repo: Arc<dyn OrdersRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn create_order(&self, new_order: NewOrder) -> Result<Order, DomainError> {
        let order = self.repo.create(new_order, timestamp_now()).await?;
        info!(order.id = %order.id, status = %order.status, "Created order");
        Ok(order)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        let orders = self.repo.find_all().await?;
        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn get_order(&self, id: &str) -> Result<Option<Order>, DomainError> {
        debug!(order.id = %id, "Getting order");
        self.repo.find_by_id(id).await
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn update_order(
        &self,
        id: &str,
        update: OrderUpdate,
    ) -> Result<Option<Order>, DomainError> {
        let updated = self.repo.update(id, update, timestamp_now()).await?;
        if updated.is_some() {
            info!(order.id = %id, "Updated order");
        }
        Ok(updated)
    }

    /// # Errors
    /// Propagates repository errors unchanged, including
    /// [`DomainError::NotFound`].
    pub async fn delete_order(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        info!(order.id = %id, "Deleted order");
        Ok(())
    }
}
