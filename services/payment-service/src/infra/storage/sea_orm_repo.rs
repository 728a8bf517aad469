use std::pin::pin;

use async_trait::async_trait;
use futures::TryStreamExt;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter, TransactionTrait,
};
use svckit::db::DbHandle;
use svckit::ids::{new_object_id, parse_object_id};
use time::OffsetDateTime;

use crate::domain::error::DomainError;
use crate::domain::model::{NewPayment, Payment, PaymentUpdate};
use crate::domain::repo::PaymentsRepository;

use super::entity::{self, Entity as PaymentEntity};

/// Payments repository over the `payments` table.
///
/// `update` writes and re-reads inside one transaction, so concurrent
/// writers never interleave between the two.
pub struct SeaOrmPaymentsRepository {
    db: DbHandle,
}

impl SeaOrmPaymentsRepository {
    #[must_use]
    pub fn new(db: DbHandle) -> Self {
        Self { db }
    }
}

fn db_err(e: impl std::fmt::Display) -> DomainError {
    DomainError::database(e.to_string())
}

#[async_trait]
impl PaymentsRepository for SeaOrmPaymentsRepository {
    async fn create(
        &self,
        payment: NewPayment,
        stamped_at: OffsetDateTime,
    ) -> Result<Payment, DomainError> {
        let row = entity::ActiveModel {
            id: ActiveValue::Set(new_object_id()),
            order_id: ActiveValue::Set(payment.order_id),
            user_id: ActiveValue::Set(payment.user_id),
            amount: ActiveValue::Set(payment.amount),
            status: ActiveValue::Set(payment.status.as_str().to_owned()),
            created_at: ActiveValue::Set(stamped_at),
            updated_at: ActiveValue::Set(stamped_at),
        };
        let model = row.insert(self.db.conn()).await.map_err(db_err)?;
        Payment::try_from(model)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, DomainError> {
        let key = parse_object_id(id)?;
        PaymentEntity::find_by_id(key)
            .one(self.db.conn())
            .await
            .map_err(db_err)?
            .map(Payment::try_from)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Payment>, DomainError> {
        let stream = PaymentEntity::find()
            .stream(self.db.conn())
            .await
            .map_err(db_err)?;
        let mut cursor = pin!(stream);
        let mut payments = Vec::new();
        while let Some(model) = cursor.try_next().await.map_err(db_err)? {
            payments.push(Payment::try_from(model)?);
        }
        Ok(payments)
    }

    async fn update(
        &self,
        id: &str,
        update: PaymentUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<Payment>, DomainError> {
        let key = parse_object_id(id)?;
        let txn = self.db.conn().begin().await.map_err(db_err)?;

        let res = PaymentEntity::update_many()
            .set(entity::ActiveModel {
                amount: ActiveValue::Set(update.amount),
                status: ActiveValue::Set(update.status.as_str().to_owned()),
                updated_at: ActiveValue::Set(updated_at),
                ..<entity::ActiveModel as Default>::default()
            })
            .filter(entity::Column::Id.eq(key))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            txn.rollback().await.map_err(db_err)?;
            return Ok(None);
        }

        let model = PaymentEntity::find_by_id(key)
            .one(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        model.map(Payment::try_from).transpose()
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let key = parse_object_id(id)?;
        let res = PaymentEntity::delete_by_id(key)
            .exec(self.db.conn())
            .await
            .map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(DomainError::not_found(id));
        }
        Ok(())
    }
}
