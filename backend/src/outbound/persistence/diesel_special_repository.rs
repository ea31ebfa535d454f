//! PostgreSQL-backed `SpecialRepository` implementation using Diesel ORM.
//!
//! Prices cross the boundary as `f64` in the domain and `NUMERIC` in the
//! database; conversion failures (non-finite input, out-of-range values) are
//! reported as query errors.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::domain::ports::{SpecialRepository, SpecialRepositoryError};
use crate::domain::{NewSpecial, Special, SpecialChanges, SpecialFilter, SpecialId};

use super::diesel_error_mapping::{ErrorConstructors, map_diesel_error, map_pool_error};
use super::models::{NewSpecialRow, SpecialChangeset, SpecialRow};
use super::pool::DbPool;
use super::schema::specials;

const ERRORS: ErrorConstructors<SpecialRepositoryError> = ErrorConstructors {
    not_found: SpecialRepositoryError::not_found,
    query: SpecialRepositoryError::query,
    connection: SpecialRepositoryError::connection,
};

/// Diesel-backed implementation of the `SpecialRepository` port.
#[derive(Clone)]
pub struct DieselSpecialRepository {
    pool: DbPool,
}

impl DieselSpecialRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn price_to_decimal(price: f64) -> Result<Decimal, SpecialRepositoryError> {
    Decimal::try_from(price)
        .map_err(|err| SpecialRepositoryError::query(format!("price {price} not storable: {err}")))
}

fn row_to_special(row: SpecialRow) -> Result<Special, SpecialRepositoryError> {
    let price = row.price.to_f64().ok_or_else(|| {
        SpecialRepositoryError::query(format!("stored price {} not representable", row.price))
    })?;
    Ok(Special {
        id: SpecialId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        price,
        is_active: row.is_active,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

#[async_trait]
impl SpecialRepository for DieselSpecialRepository {
    async fn list_newest_first(
        &self,
        filter: SpecialFilter,
    ) -> Result<Vec<Special>, SpecialRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let mut query = specials::table
            .order(specials::created_at.desc())
            .select(SpecialRow::as_select())
            .into_boxed();
        if filter == SpecialFilter::ActiveOnly {
            query = query.filter(specials::is_active.eq(true));
        }

        let rows: Vec<SpecialRow> = query
            .load(&mut conn)
            .await
            .map_err(|e| map_diesel_error(e, &ERRORS))?;

        rows.into_iter().map(row_to_special).collect()
    }

    async fn find_by_id(&self, id: &SpecialId) -> Result<Option<Special>, SpecialRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let row: Option<SpecialRow> = specials::table
            .find(id.as_uuid())
            .select(SpecialRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| map_diesel_error(e, &ERRORS))?;

        row.map(row_to_special).transpose()
    }

    async fn create(&self, special: &NewSpecial) -> Result<Special, SpecialRepositoryError> {
        let new_row = NewSpecialRow {
            title: &special.title,
            description: special.description.as_deref(),
            price: price_to_decimal(special.price)?,
            is_active: special.is_active,
        };

        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let row: SpecialRow = diesel::insert_into(specials::table)
            .values(&new_row)
            .returning(SpecialRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| map_diesel_error(e, &ERRORS))?;

        row_to_special(row)
    }

    async fn update(
        &self,
        id: &SpecialId,
        changes: &SpecialChanges,
    ) -> Result<Special, SpecialRepositoryError> {
        let changeset = SpecialChangeset {
            title: changes.title.as_deref(),
            description: changes.description.as_ref().map(Option::as_deref),
            price: changes.price.map(price_to_decimal).transpose()?,
            is_active: changes.is_active,
        };

        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let row: SpecialRow = diesel::update(specials::table.find(id.as_uuid()))
            .set((changeset, specials::updated_at.eq(diesel::dsl::now)))
            .returning(SpecialRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| map_diesel_error(e, &ERRORS))?;

        row_to_special(row)
    }

    async fn delete(&self, id: &SpecialId) -> Result<Special, SpecialRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|e| map_pool_error(e, &ERRORS))?;

        let row: SpecialRow = diesel::delete(specials::table.find(id.as_uuid()))
            .returning(SpecialRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| map_diesel_error(e, &ERRORS))?;

        row_to_special(row)
    }
}
