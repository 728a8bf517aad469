use serde::{Deserialize, Serialize};
use svckit::validation::one_of;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::model::{NewOrder, Order, OrderStatus, OrderUpdate, UnknownStatus};

/// REST representation of an order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: Uuid,
    pub customer_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub status: OrderStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateOrderReq {
    #[validate(length(min = 1, message = "is required"))]
    pub customer_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub product_id: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(custom(function = "validate_order_status"))]
    #[schema(value_type = OrderStatus)]
    pub status: String,
}

/// Body of `PUT /api/orders/{id}`: every field is replaced.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateOrderReq {
    #[validate(length(min = 1, message = "is required"))]
    pub customer_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub product_id: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(custom(function = "validate_order_status"))]
    #[schema(value_type = OrderStatus)]
    pub status: String,
}

fn validate_order_status(status: &str) -> Result<(), ValidationError> {
    one_of(status, &OrderStatus::VALUES)
}

impl From<Order> for OrderDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_id: order.customer_id,
            product_id: order.product_id,
            quantity: order.quantity,
            status: order.status,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl TryFrom<CreateOrderReq> for NewOrder {
    type Error = UnknownStatus;

    fn try_from(req: CreateOrderReq) -> Result<Self, Self::Error> {
        Ok(Self {
            status: req.status.parse()?,
            customer_id: req.customer_id,
            product_id: req.product_id,
            quantity: req.quantity,
        })
    }
}

impl TryFrom<UpdateOrderReq> for OrderUpdate {
    type Error = UnknownStatus;

    fn try_from(req: UpdateOrderReq) -> Result<Self, Self::Error> {
        Ok(Self {
            status: req.status.parse()?,
            customer_id: req.customer_id,
            product_id: req.product_id,
            quantity: req.quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(quantity: i32, status: &str) -> UpdateOrderReq {
        UpdateOrderReq {
            customer_id: "c1".to_owned(),
            product_id: "p1".to_owned(),
            quantity,
            status: status.to_owned(),
        }
    }

    #[test]
    fn zero_quantity_fails_min() {
        let errs = req(0, "pending").validate().unwrap_err();
        assert!(errs.field_errors().contains_key("quantity"));
    }

    #[test]
    fn unknown_status_fails_oneof() {
        let errs = req(1, "cancelled").validate().unwrap_err();
        let fields = errs.field_errors();
        let status = fields["status"];
        assert_eq!(status[0].code, "oneof");
    }

    #[test]
    fn empty_ids_are_rejected() {
        let create = CreateOrderReq {
            customer_id: String::new(),
            product_id: String::new(),
            quantity: 1,
            status: "pending".to_owned(),
        };
        let errs = create.validate().unwrap_err();
        assert_eq!(errs.field_errors().len(), 2);
    }

    #[test]
    fn valid_request_converts() {
        let update = OrderUpdate::try_from(req(3, "delivered")).unwrap();
        assert_eq!(update.status, OrderStatus::Delivered);
        assert_eq!(update.quantity, 3);
    }
}
