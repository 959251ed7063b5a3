//! Series model and DTOs.

use gunpla_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `series` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Series {
    pub id: DbId,
    pub name: String,
    /// Universe the series belongs to (Universal Century, Cosmic Era, ...).
    pub timeline: Option<String>,
    pub start_year: Option<i32>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSeries {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 100))]
    pub timeline: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub start_year: Option<i32>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSeries {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub timeline: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub start_year: Option<i32>,
    pub description: Option<String>,
}
