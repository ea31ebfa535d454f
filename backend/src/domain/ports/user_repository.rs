//! Port abstraction for user persistence adapters and their errors.
//!
//! The store owns identifier and timestamp generation. Mutations that target a
//! missing record must fail with [`UserRepositoryError::NotFound`] so the
//! service layer can tell "absent" apart from genuine failures.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::define_repository_error;

define_repository_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserRepositoryError for "user";
}

/// Driven port for user storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every user, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Insert a user and return the stored record.
    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError>;

    /// Apply `changes` to an existing user and refresh `updated_at`.
    ///
    /// Fails with [`UserRepositoryError::NotFound`] when `id` is unknown.
    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, UserRepositoryError>;

    /// Remove a user and return the deleted record.
    ///
    /// Fails with [`UserRepositoryError::NotFound`] when `id` is unknown.
    async fn delete(&self, id: &UserId) -> Result<User, UserRepositoryError>;
}
