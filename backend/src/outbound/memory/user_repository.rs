//! In-memory `UserRepository`.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserChanges, UserId};

use super::{lock_store, newest_first};

/// Mutex-guarded user store stamping records with the injected clock.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<User>>, UserRepositoryError> {
        lock_store(&self.users, UserRepositoryError::connection)
    }
}

fn ensure_unique_email(
    users: &[User],
    email: &str,
    except: Option<UserId>,
) -> Result<(), UserRepositoryError> {
    let taken = users
        .iter()
        .any(|user| user.email == email && Some(user.id) != except);
    if taken {
        return Err(UserRepositoryError::query("unique constraint violated"));
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_newest_first(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = self.lock()?;
        Ok(newest_first(&users, |user| user.created_at, |_| true))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = self.lock()?;
        Ok(users.iter().find(|user| user.id == *id).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.lock()?;
        ensure_unique_email(&users, &user.email, None)?;

        let now = self.clock.utc();
        let created = User {
            id: UserId::random(),
            email: user.email.clone(),
            name: user.name.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, UserRepositoryError> {
        let mut users = self.lock()?;
        let index = users
            .iter()
            .position(|user| user.id == *id)
            .ok_or_else(UserRepositoryError::not_found)?;
        if let Some(email) = &changes.email {
            ensure_unique_email(&users, email, Some(*id))?;
        }

        let now = self.clock.utc();
        let user = users
            .get_mut(index)
            .ok_or_else(UserRepositoryError::not_found)?;
        changes.apply_to(user);
        user.updated_at = now;
        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        let mut users = self.lock()?;
        let index = users
            .iter()
            .position(|user| user.id == *id)
            .ok_or_else(UserRepositoryError::not_found)?;
        Ok(users.remove(index))
    }
}
