use async_trait::async_trait;
use time::OffsetDateTime;

use super::error::DomainError;
use super::model::{NewPayment, Payment, PaymentUpdate};

/// Persistence port for payments.
#[async_trait]
pub trait PaymentsRepository: Send + Sync {
    async fn create(
        &self,
        payment: NewPayment,
        stamped_at: OffsetDateTime,
    ) -> Result<Payment, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, DomainError>;

    async fn find_all(&self) -> Result<Vec<Payment>, DomainError>;

    /// Applies `update` and returns the document as it stands right after the
    /// write, or `Ok(None)` when the id is unknown. The write and the read
    /// are atomic with respect to other writers.
    async fn update(
        &self,
        id: &str,
        update: PaymentUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Payment>, DomainError>;

    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
