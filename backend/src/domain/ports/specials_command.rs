//! Driving port for special mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewSpecial, Special, SpecialChanges, SpecialId};

/// Domain use-case port for creating, editing, and removing specials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialsCommand: Send + Sync {
    /// Create a special and return the stored record.
    async fn create_special(&self, special: NewSpecial) -> Result<Special, Error>;

    /// Apply a partial update; `Ok(None)` when the special does not exist.
    async fn update_special(
        &self,
        id: &SpecialId,
        changes: SpecialChanges,
    ) -> Result<Option<Special>, Error>;

    /// Delete a special; `Ok(None)` when it does not exist.
    async fn delete_special(&self, id: &SpecialId) -> Result<Option<Special>, Error>;
}
