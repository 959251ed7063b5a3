//! Autocomplete suggestion rows.

use gunpla_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A lightweight `(id, name)` pair returned by admin autocomplete.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq)]
pub struct LookupItem {
    pub id: DbId,
    pub name: String,
}
