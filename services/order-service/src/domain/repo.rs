use async_trait::async_trait;
use time::OffsetDateTime;

use super::error::DomainError;
use super::model::{NewOrder, Order, OrderUpdate};

/// Persistence port for orders.
///
/// Identifiers arrive as raw path strings; implementations reject ones that
/// are not valid keys with [`DomainError::InvalidId`].
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Inserts `order` under a freshly generated id with both timestamps set
    /// to `stamped_at`.
    async fn create(
        &self,
        order: NewOrder,
        stamped_at: OffsetDateTime,
    ) -> Result<Order, DomainError>;

    /// `Ok(None)` when no order has this id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError>;

    /// Every stored order, in store order.
    async fn find_all(&self) -> Result<Vec<Order>, DomainError>;

    /// Overwrites the mutable fields and `updated_at`; `Ok(None)` when no order
    /// has this id. `created_at` is never touched.
    async fn update(
        &self,
        id: &str,
        update: OrderUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Order>, DomainError>;

    /// Fails with [`DomainError::NotFound`] when nothing was removed.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
