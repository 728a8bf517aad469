use async_trait::async_trait;
use time::OffsetDateTime;

use super::error::DomainError;
use super::model::{NewUser, User, UserUpdate};

/// Persistence port for users.
///
/// Ids are raw path segments; malformed ones yield
/// [`DomainError::InvalidId`].
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn create(&self, user: NewUser, stamped_at: OffsetDateTime) -> Result<User, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;

    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Replaces name, email and age and sets `updated_at`. `Ok(None)` when
    /// the user does not exist.
    async fn update(
        &self,
        id: &str,
        update: UserUpdate,
        updated_at: OffsetDateTime,
    ) -> Result<Option<User>, DomainError>;

    /// [`DomainError::NotFound`] when no row was removed.
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
