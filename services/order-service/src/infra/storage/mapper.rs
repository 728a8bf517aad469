use crate::domain::error::DomainError;
use crate::domain::model::Order;

use super::entity;

impl TryFrom<entity::Model> for Order {
    type Error = DomainError;

    fn try_from(m: entity::Model) -> Result<Self, Self::Error> {
        let status = m
            .status
            .parse()
            .map_err(|e| DomainError::database(format!("corrupt order row {}: {e}", m.id)))?;
        Ok(Self {
            id: m.id,
            customer_id: m.customer_id,
            product_id: m.product_id,
            quantity: m.quantity,
            status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OrderStatus;
    use time::OffsetDateTime;
    use uuid::Uuid;

    fn row(status: &str) -> entity::Model {
        let now = OffsetDateTime::now_utc();
        entity::Model {
            id: Uuid::now_v7(),
            customer_id: "c1".to_owned(),
            product_id: "p1".to_owned(),
            quantity: 4,
            status: status.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn maps_every_column() {
        let m = row("confirmed");
        let order = Order::try_from(m.clone()).unwrap();
        assert_eq!(order.id, m.id);
        assert_eq!(order.quantity, 4);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.created_at, m.created_at);
    }

    #[test]
    fn unknown_stored_status_is_a_database_error() {
        let err = Order::try_from(row("lost")).unwrap_err();
        assert!(matches!(err, DomainError::Database { .. }));
    }
}
