use std::pin::pin;

use async_trait::async_trait;
use futures::TryStreamExt;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};
use svckit::db::DbHandle;
use svckit::ids::{new_object_id, parse_object_id};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::model::{NewProduct, Product, ProductUpdate};
use crate::domain::repo::ProductsRepository;

use super::entity::{self, Entity as ProductEntity};

pub struct SeaOrmProductsRepository {
    db: DbHandle,
}

impl SeaOrmProductsRepository {
    #[must_use]
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn db_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::database(e.to_string())
}

#[async_trait]
impl ProductsRepository for SeaOrmProductsRepository {
    async fn create(
        &self,
        product: NewProduct,
        stamped_at: OffsetDateTime,
    ) -> Result<Product, DomainError> {
        let row = entity::ActiveModel {
            id: ActiveValue::Set(new_object_id()),
            name: ActiveValue::Set(product.name),
            description: ActiveValue::Set(product.description),
            price: ActiveValue::Set(product.price),
            created_at: ActiveValue::Set(stamped_at),
            updated_at: ActiveValue::Set(stamped_at),
        };
        let model = row.insert(self.db.conn()).await.map_err(db_err)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let key = parse_object_id(id)?;
        let found = ProductEntity::find_by_id(key)
            .one(self.db.conn())
            .await
            .map_err(db_err)?;
        Ok(found.map(Product::from))
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let stream = ProductEntity::find()
            .stream(self.db.conn())
            .await
            .map_err(db_err)?;
        pin!(stream)
            .map_ok(Product::from)
            .try_collect()
            .await
            .map_err(db_err)
    }

    async fn update(
        &self,
        id: &str,
        update: ProductUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Product>, DomainError> {
        let key = parse_object_id(id)?;
        let changes = entity::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(update.name),
            description: ActiveValue::Set(update.description),
            price: ActiveValue::Set(update.price),
            created_at: ActiveValue::NotSet,
            updated_at: ActiveValue::Set(updated_at),
        };
        let res = ProductEntity::update_many()
            .set(changes)
            .filter(entity::Column::Id.eq(key))
            .exec(self.db.conn())
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        self.find_by_id(id).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let key = parse_object_id(id)?;
        let res = ProductEntity::delete_by_id(key)
            .exec(self.db.conn())
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(DomainError::not_found(id));
        }
        Ok(())
    }
}
