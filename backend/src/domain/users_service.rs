//! User domain service.
//!
//! Thin pass-through from the driving ports to a [`UserRepository`]. The only
//! logic here is failure classification: a missing target on update or delete
//! becomes `Ok(None)`, anything else stays an error.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// User service implementing the user driving ports.
#[derive(Clone)]
pub struct UsersService<R> {
    repository: Arc<R>,
}

impl<R> UsersService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    Error::internal(format!("user store failure: {error}"))
}

/// Collapse a missing target into `None` and keep every other failure.
fn absent_if_missing(result: Result<User, UserRepositoryError>) -> Result<Option<User>, Error> {
    match result {
        Ok(user) => Ok(Some(user)),
        Err(error) if error.is_not_found() => Ok(None),
        Err(error) => Err(map_repository_error(error)),
    }
}

#[async_trait]
impl<R> UsersQuery for UsersService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list_newest_first()
            .await
            .map_err(map_repository_error)
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UsersService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        self.repository
            .create(&user)
            .await
            .map_err(map_repository_error)
    }

    async fn update_user(&self, id: &UserId, changes: UserChanges) -> Result<Option<User>, Error> {
        absent_if_missing(self.repository.update(id, &changes).await)
    }

    async fn delete_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        absent_if_missing(self.repository.delete(id).await)
    }
}
