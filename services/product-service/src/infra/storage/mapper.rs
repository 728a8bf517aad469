use crate::domain::model::Product;

use super::entity;

impl From<entity::Model> for Product {
    fn from(m: entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
