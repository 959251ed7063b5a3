//! Grade (kit product line) model and DTOs.

use gunpla_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `grades` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Grade {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub scale: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new grade.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGrade {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 16))]
    pub code: String,
    #[validate(length(max = 16))]
    pub scale: Option<String>,
    pub description: Option<String>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing grade. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateGrade {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 16))]
    pub code: Option<String>,
    #[validate(length(max = 16))]
    pub scale: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
