//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! The store assigns `id`, `created_at`, and `updated_at`; every mutation
//! uses `RETURNING` so callers receive the row as persisted.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{NewUser, User, UserChanges, UserId};

use super::diesel_error_mapping::{ErrorConstructors, map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::DbPool;
use super::schema::users;

const ERRORS: ErrorConstructors<UserRepositoryError> = ErrorConstructors {
    not_found: UserRepositoryError::not_found,
    query: UserRepositoryError::query,
    connection: UserRepositoryError::connection,
};

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: UserRow) -> User {
    User {
        id: UserId::from_uuid(row.id),
        email: row.email,
        name: row.name,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn list_newest_first(&self) -> Result<Vec<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let rows: Vec<UserRow> = users::table
            .order(users::created_at.desc())
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| map_diesel_error(e, &ERRORS))?;

        Ok(rows.into_iter().map(row_to_user).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let row: Option<UserRow> = users::table
            .find(id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| map_diesel_error(e, &ERRORS))?;

        Ok(row.map(row_to_user))
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let new_row = NewUserRow {
            email: &user.email,
            name: user.name.as_deref(),
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_user)
            .map_err(|e| map_diesel_error(e, &ERRORS))
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let changeset = UserChangeset {
            email: changes.email.as_deref(),
            name: changes.name.as_ref().map(Option::as_deref),
        };

        diesel::update(users::table.find(id.as_uuid()))
            .set((changeset, users::updated_at.eq(diesel::dsl::now)))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_user)
            .map_err(|e| map_diesel_error(e, &ERRORS))
    }

    async fn delete(&self, id: &UserId) -> Result<User, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        diesel::delete(users::table.find(id.as_uuid()))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_user)
            .map_err(|e| map_diesel_error(e, &ERRORS))
    }
}
