use std::pin::pin;

use async_trait::async_trait;
use futures::TryStreamExt;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};
use svckit::db::DbHandle;
use svckit::ids::{new_object_id, parse_object_id};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::{NewOrder, Order, OrderUpdate};
use crate::domain::repo::OrdersRepository;

use super::entity::{self, Entity as OrderEntity};

/// Orders repository over the `orders` table.
///
/// Updates overwrite the mutable columns and then re-read the row.
pub struct SeaOrmOrdersRepository {
    db: DbHandle,
}

impl SeaOrmOrdersRepository {
    #[must_use]
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        OrderEntity::find_by_id(id)
            .one(self.db.conn())
            .await
            .map_err(db_err)?
            .map(Order::try_from)
            .transpose()
    }
}

fn db_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::database(e.to_string())
}

#[async_trait]
impl OrdersRepository for SeaOrmOrdersRepository {
    async fn create(
        &self,
        order: NewOrder,
        stamped_at: OffsetDateTime,
    ) -> Result<Order, DomainError> {
        let row = entity::ActiveModel {
            id: ActiveValue::Set(new_object_id()),
            customer_id: ActiveValue::Set(order.customer_id),
            product_id: ActiveValue::Set(order.product_id),
            quantity: ActiveValue::Set(order.quantity),
            status: ActiveValue::Set(order.status.as_str().to_owned()),
            created_at: ActiveValue::Set(stamped_at),
            updated_at: ActiveValue::Set(stamped_at),
        };
        let model = row.insert(self.db.conn()).await.map_err(db_err)?;
        Order::try_from(model)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError> {
        self.fetch(parse_object_id(id)?).await
    }

    async fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let stream = OrderEntity::find()
            .stream(self.db.conn())
            .await
            .map_err(db_err)?;
        let mut cursor = pin!(stream);
        let mut orders = Vec::new();
        while let Some(model) = cursor.try_next().await.map_err(db_err)? {
            orders.push(Order::try_from(model)?);
        }
        Ok(orders)
    }

    async fn update(
        &self,
        id: &str,
        update: OrderUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Order>, DomainError> {
        let id = parse_object_id(id)?;
        let changes = entity::ActiveModel {
            id: ActiveValue::NotSet,
            customer_id: ActiveValue::Set(update.customer_id),
            product_id: ActiveValue::Set(update.product_id),
            quantity: ActiveValue::Set(update.quantity),
            status: ActiveValue::Set(update.status.as_str().to_owned()),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(updated_at),
        };
        let res = OrderEntity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(id))
            .exec(self.db.conn())
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        self.fetch(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let key = parse_object_id(id)?;
        let res = OrderEntity::delete_many()
            .filter(entity::Column::Id.eq(key))
            .exec(self.db.conn())
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(DomainError::not_found(id));
        }
        Ok(())
    }
}
