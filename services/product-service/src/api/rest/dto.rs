use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::model::{NewProduct, Product, ProductUpdate};

/// REST representation of a product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body of both `POST /api/products` and `PUT /api/products/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ProductReq {
    #[validate(length(min = 3, max = 100))]
    pub name: String,
    #[validate(length(min = 5))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<ProductReq> for NewProduct {
    fn from(req: ProductReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}

impl From<ProductReq> for ProductUpdate {
    fn from(req: ProductReq) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
        }
    }
}
