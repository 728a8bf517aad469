use crate::domain::error::DomainError;
use crate::domain::model::Payment;

use super::entity;

impl TryFrom<entity::Model> for Payment {
    type Error = DomainError;

    fn try_from(m: entity::Model) -> Result<Self, Self::Error> {
        let status = m
            .status
            .parse()
            .map_err(|e| DomainError::database(format!("corrupt payment row {}: {e}", m.id)))?;
        Ok(Self {
            id: m.id,
            order_id: m.order_id,
            user_id: m.user_id,
            amount: m.amount,
            status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}
