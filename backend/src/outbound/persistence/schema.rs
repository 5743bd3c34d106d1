//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Doctor directory records.
    ///
    /// `id` is assigned by the database (`gen_random_uuid()`); `created_at`
    /// fixes listing order.
    doctors (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Display name.
        name -> Text,
        /// Medical specialty, matched exactly when filtering.
        specialty -> Text,
        /// Practice location, matched exactly when filtering.
        location -> Text,
        /// Years of experience.
        experience -> Double,
        /// Rating on a one to five scale.
        rating -> Double,
        /// Insertion timestamp.
        created_at -> Timestamptz,
    }
}
