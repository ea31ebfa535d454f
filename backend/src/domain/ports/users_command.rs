//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Domain use-case port for creating, editing, and removing users.
///
/// `update_user` and `delete_user` return `Ok(None)` when the target does not
/// exist; every other failure is an `Err`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user and return the stored record.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Apply a partial update.
    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<Option<User>, Error>;

    /// Delete a user, returning the removed record.
    async fn delete_user(&self, id: &UserId) -> Result<Option<User>, Error>;
}
