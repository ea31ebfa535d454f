//! Shared Diesel error mapping for the entity repositories.
//!
//! Both repositories expose the same `Connection` / `Query` / `NotFound`
//! shape, so the classification lives here and each repository passes its
//! own constructors in.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Constructors for a repository error type.
pub(super) struct ErrorConstructors<E> {
    pub not_found: fn() -> E,
    pub query: fn(String) -> E,
    pub connection: fn(String) -> E,
}

/// Map pool errors into the repository's connection variant.
pub(super) fn map_pool_error<E>(error: PoolError, ctors: &ErrorConstructors<E>) -> E {
    (ctors.connection)(error.into_message())
}

/// Map a Diesel failure into the repository's error type.
///
/// `NotFound` is kept distinct so update and delete of a missing record can
/// be reported as absent by the service layer.
pub(super) fn map_diesel_error<E>(error: DieselError, ctors: &ErrorConstructors<E>) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => (ctors.not_found)(),
        DieselError::QueryBuilderError(_) => (ctors.query)("database query error".to_owned()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            (ctors.connection)("database connection error".to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            (ctors.query)("unique constraint violated".to_owned())
        }
        DieselError::DatabaseError(_, _) => (ctors.query)("database error".to_owned()),
        _ => (ctors.query)("database error".to_owned()),
    }
}
