//! In-memory `SpecialRepository`.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{SpecialRepository, SpecialRepositoryError};
use crate::domain::{NewSpecial, Special, SpecialChanges, SpecialFilter, SpecialId};

use super::{lock_store, newest_first};

/// Mutex-guarded special store stamping records with the injected clock.
pub struct InMemorySpecialRepository {
    specials: Mutex<Vec<Special>>,
    clock: Arc<dyn Clock>,
}

impl InMemorySpecialRepository {
    /// Create an empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            specials: Mutex::new(Vec::new()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Special>>, SpecialRepositoryError> {
        lock_store(&self.specials, SpecialRepositoryError::connection)
    }
}

#[async_trait]
impl SpecialRepository for InMemorySpecialRepository {
    async fn list_newest_first(
        &self,
        filter: SpecialFilter,
    ) -> Result<Vec<Special>, SpecialRepositoryError> {
        let specials = self.lock()?;
        Ok(newest_first(
            &specials,
            |special| special.created_at,
            |special| filter.matches(special),
        ))
    }

    async fn find_by_id(&self, id: &SpecialId) -> Result<Option<Special>, SpecialRepositoryError> {
        let specials = self.lock()?;
        Ok(specials.iter().find(|special| special.id == *id).cloned())
    }

    async fn create(&self, special: &NewSpecial) -> Result<Special, SpecialRepositoryError> {
        if !special.price.is_finite() {
            return Err(SpecialRepositoryError::query("price must be finite"));
        }
        let mut specials = self.lock()?;

        let now = self.clock.utc();
        let created = Special {
            id: SpecialId::random(),
            title: special.title.clone(),
            description: special.description.clone(),
            price: special.price,
            is_active: special.is_active.unwrap_or(true),
            created_at: now,
            updated_at: now,
        };
        specials.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &SpecialId,
        changes: &SpecialChanges,
    ) -> Result<Special, SpecialRepositoryError> {
        if changes.price.is_some_and(|price| !price.is_finite()) {
            return Err(SpecialRepositoryError::query("price must be finite"));
        }
        let mut specials = self.lock()?;

        let now = self.clock.utc();
        let special = specials
            .iter_mut()
            .find(|special| special.id == *id)
            .ok_or_else(SpecialRepositoryError::not_found)?;
        changes.apply_to(special);
        special.updated_at = now;
        Ok(special.clone())
    }

    async fn delete(&self, id: &SpecialId) -> Result<Special, SpecialRepositoryError> {
        let mut specials = self.lock()?;
        let index = specials
            .iter()
            .position(|special| special.id == *id)
            .ok_or_else(SpecialRepositoryError::not_found)?;
        Ok(specials.remove(index))
    }
}
