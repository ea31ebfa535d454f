//! Special domain service.
//!
//! Same contract as the user service: reads and creates pass straight
//! through, update and delete turn a missing target into `Ok(None)`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    SpecialRepository, SpecialRepositoryError, SpecialsCommand, SpecialsQuery,
};
use crate::domain::{Error, NewSpecial, Special, SpecialChanges, SpecialFilter, SpecialId};

/// Special service implementing the special driving ports.
#[derive(Clone)]
pub struct SpecialsService<R> {
    repository: Arc<R>,
}

impl<R> SpecialsService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: SpecialRepositoryError) -> Error {
    Error::internal(format!("special store failure: {error}"))
}

fn absent_if_missing(
    result: Result<Special, SpecialRepositoryError>,
) -> Result<Option<Special>, Error> {
    match result {
        Ok(special) => Ok(Some(special)),
        Err(error) if error.is_not_found() => Ok(None),
        Err(error) => Err(map_repository_error(error)),
    }
}

impl<R> SpecialsService<R>
where
    R: SpecialRepository,
{
    async fn list(&self, filter: SpecialFilter) -> Result<Vec<Special>, Error> {
        self.repository
            .list_newest_first(filter)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> SpecialsQuery for SpecialsService<R>
where
    R: SpecialRepository,
{
    async fn list_specials(&self) -> Result<Vec<Special>, Error> {
        self.list(SpecialFilter::All).await
    }

    async fn list_active_specials(&self) -> Result<Vec<Special>, Error> {
        self.list(SpecialFilter::ActiveOnly).await
    }

    async fn find_special(&self, id: &SpecialId) -> Result<Option<Special>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> SpecialsCommand for SpecialsService<R>
where
    R: SpecialRepository,
{
    async fn create_special(&self, special: NewSpecial) -> Result<Special, Error> {
        self.repository
            .create(&special)
            .await
            .map_err(map_repository_error)
    }

    async fn update_special(
        &self,
        id: &SpecialId,
        changes: SpecialChanges,
    ) -> Result<Option<Special>, Error> {
        absent_if_missing(self.repository.update(id, &changes).await)
    }

    async fn delete_special(&self, id: &SpecialId) -> Result<Option<Special>, Error> {
        absent_if_missing(self.repository.delete(id).await)
    }
}
