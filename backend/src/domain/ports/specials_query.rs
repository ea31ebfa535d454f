//! Driving port for special reads.

use async_trait::async_trait;

use crate::domain::{Error, Special, SpecialId};

/// Domain use-case port for reading specials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpecialsQuery: Send + Sync {
    /// Return all specials, newest first.
    async fn list_specials(&self) -> Result<Vec<Special>, Error>;

    /// Return only active specials, newest first.
    async fn list_active_specials(&self) -> Result<Vec<Special>, Error>;

    /// Return the special with `id`, or `None` when it does not exist.
    async fn find_special(&self, id: &SpecialId) -> Result<Option<Special>, Error>;
}
