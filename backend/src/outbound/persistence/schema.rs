//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`
//! exactly. The `diesel print-schema` command can regenerate them from a live
//! database.

diesel::table! {
    /// Registered users.
    ///
    /// `id` defaults to `gen_random_uuid()`; `email` carries a unique index.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Contact address, unique across users.
        email -> Text,
        /// Optional display name.
        name -> Nullable<Text>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Menu specials.
    specials (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        title -> Text,
        description -> Nullable<Text>,
        /// Fixed-point price, `NUMERIC(10, 2)`.
        price -> Numeric,
        /// Defaults to `true` when omitted on insert.
        is_active -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, specials);
