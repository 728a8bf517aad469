use crate::domain::model::User;

use super::entity;

impl From<entity::Model> for User {
    fn from(m: entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            age: m.age,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<User> for entity::ActiveModel {
    fn from(u: User) -> Self {
        use sea_orm::ActiveValue::Set;
        Self {
            id: Set(u.id),
            name: Set(u.name),
            email: Set(u.email),
            age: Set(u.age),
            created_at: Set(u.created_at),
            updated_at: Set(u.updated_at),
        }
    }
}
