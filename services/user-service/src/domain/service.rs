use std::sync::Arc;

use svckit::clock::timestamp_now;
use tracing::{debug, info};

use super::error::DomainError;
use super::model::{NewUser, User, UserUpdate};
use super::repo::UsersRepository;

/// User use-cases.
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
}

impl UsersService {
    #[must_use]
    pub fn new(repo: Arc<dyn UsersRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        let user = self.repo.create(new_user, timestamp_now()).await?;
        info!(user.id = %user.id, "Created user");
        Ok(user)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let users = self.repo.find_all().await?;
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn get_user(&self, id: &str) -> Result<Option<User>, DomainError> {
        debug!(user.id = %id, "Getting user");
        self.repo.find_by_id(id).await
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn update_user(
        &self,
        id: &str,
        update: UserUpdate,
    ) -> Result<Option<User>, DomainError> {
        let updated = self.repo.update(id, update, timestamp_now()).await?;
        if updated.is_some() {
            info!(user.id = %id, "Updated user");
        }
        Ok(updated)
    }

    /// # Errors
    /// Propagates repository errors unchanged.
    pub async fn delete_user(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await?;
        info!(user.id = %id, "Deleted user");
        Ok(())
    }
}
