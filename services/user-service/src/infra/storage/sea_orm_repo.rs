use std::pin::pin;

use async_trait::async_trait;
use futures::TryStreamExt;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};
use svckit::db::DbHandle;
use svckit::ids::{new_object_id, parse_object_id};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::model::{NewUser, User, UserUpdate};
use crate::domain::repo::UsersRepository;

use super::entity::{self, Entity as UserEntity};

pub struct SeaOrmUsersRepository {
    db: DbHandle,
}

impl SeaOrmUsersRepository {
    #[must_use]
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn db_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::database(e.to_string())
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    async fn create(&self, user: NewUser, stamped_at: OffsetDateTime) -> Result<User, DomainError> {
        let row: entity::ActiveModel = User {
            id: new_object_id(),
            name: user.name,
            email: user.email,
            age: user.age,
            created_at: stamped_at,
            updated_at: stamped_at,
        }
        .into();
        let model = row.insert(self.db.conn()).await.map_err(db_err)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let key = parse_object_id(id)?;
        let found = UserEntity::find_by_id(key)
            .one(self.db.conn())
            .await
            .map_err(db_err)?;
        Ok(found.map(User::from))
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let mut rows = pin!(
            UserEntity::find()
                .stream(self.db.conn())
                .await
                .map_err(db_err)?
        );
        let mut users = Vec::new();
        while let Some(model) = rows.try_next().await.map_err(db_err)? {
            users.push(User::from(model));
        }
        Ok(users)
    }

    async fn update(
        &self,
        id: &str,
        update: UserUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<User>, DomainError> {
        let key = parse_object_id(id)?;
        let res = UserEntity::update_many()
            .set(entity::ActiveModel {
                name: ActiveValue::Set(update.name),
                email: ActiveValue::Set(update.email),
                age: ActiveValue::Set(update.age),
                updated_at: ActiveValue::Set(updated_at),
                ..<entity::ActiveModel as Default>::default()
            })
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
        let res = UserEntity::delete_by_id(key)
            .exec(self.db.conn())
            .await
            .map_err(db_err)?;
        match res.rows_affected {
            0 => Err(DomainError::not_found(id)),
            _ => Ok(()),
        }
    }
}
