//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::schema::{specials, users};

// ---------------------------------------------------------------------------
// User models
// ---------------------------------------------------------------------------

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
///
/// `id` and timestamps are left to column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub name: Option<&'a str>,
}

/// Changeset struct for partial user updates.
///
/// `None` skips a column; `Some(None)` writes `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserChangeset<'a> {
    pub email: Option<&'a str>,
    pub name: Option<Option<&'a str>>,
}

// ---------------------------------------------------------------------------
// Special models
// ---------------------------------------------------------------------------

/// Row struct for reading from the specials table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = specials)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SpecialRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new special records.
///
/// `is_active: None` falls back to the column default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = specials)]
pub(crate) struct NewSpecialRow<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub price: Decimal,
    pub is_active: Option<bool>,
}

/// Changeset struct for partial special updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = specials)]
pub(crate) struct SpecialChangeset<'a> {
    pub title: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub price: Option<Decimal>,
    pub is_active: Option<bool>,
}
