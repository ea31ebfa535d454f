//! Port abstraction for special persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewSpecial, Special, SpecialChanges, SpecialFilter, SpecialId};

use super::define_repository_error;

define_repository_error! {
    /// Persistence errors raised by special repository adapters.
    pub enum SpecialRepositoryError for "special";
}

/// Driven port for special storage.
///
/// Mirrors [`super::UserRepository`]: missing targets on update and delete
/// surface as [`SpecialRepositoryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialRepository: Send + Sync {
    /// Return specials passing `filter`, newest `created_at` first.
    async fn list_newest_first(
        &self,
        filter: SpecialFilter,
    ) -> Result<Vec<Special>, SpecialRepositoryError>;

    /// Fetch a special by identifier.
    async fn find_by_id(&self, id: &SpecialId) -> Result<Option<Special>, SpecialRepositoryError>;

    /// Insert a special and return the stored record.
    async fn create(&self, special: &NewSpecial) -> Result<Special, SpecialRepositoryError>;

    /// Apply `changes` to an existing special and refresh `updated_at`.
    async fn update(
        &self,
        id: &SpecialId,
        changes: &SpecialChanges,
    ) -> Result<Special, SpecialRepositoryError>;

    /// Remove a special and return the deleted record.
    async fn delete(&self, id: &SpecialId) -> Result<Special, SpecialRepositoryError>;
}
