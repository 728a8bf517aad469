use std::sync::Arc;

use svckit::clock::timestamp_now;
use tracing::{debug, info};

use super::error::DomainError;
use super::model::{NewPayment, Payment, PaymentDraft, PaymentUpdate};
use super::repo::PaymentsRepository;

pub struct PaymentsService {
    repo: Arc<dyn PaymentsRepository>,
}

impl PaymentsService {
    #[must_use]
    pub fn new(repo: Arc<dyn PaymentsRepository>) -> Self {
        Self { repo }
    }

    /// Records a payment; a draft without a status starts out pending.
    ///
    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn create_payment(&self, draft: PaymentDraft) -> Result<Payment, DomainError> {
        let new_payment = NewPayment {
            order_id: draft.order_id,
            user_id: draft.user_id,
            amount: draft.amount,
            status: draft.status.unwrap_or_default(),
        };
        let payment = self.repo.create(new_payment, timestamp_now()).await?;
        info!(
            payment.id = %payment.id,
            order.id = %payment.order_id,
            status = %payment.status,
            "Created payment"
        );
        Ok(payment)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, DomainError> {
        let payments = self.repo.find_all().await?;
        debug!(count = payments.len(), "Listed payments");
        Ok(payments)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn get_payment(&self, id: &str) -> Result<Option<Payment>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn update_payment(
        &self,
        id: &str,
        update: PaymentUpdate,
    ) -> Result<Option<Payment>, DomainError> {
        let status = update.status;
        let updated = self.repo.update(id, update, timestamp_now()).await?;
        if updated.is_some() {
            info!(payment.id = %id, %status, "Updated payment");
        }
        Ok(updated)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn delete_payment(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        info!(payment.id = %id, "Deleted payment");
        Ok(())
    }
}
