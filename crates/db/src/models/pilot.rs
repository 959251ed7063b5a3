//! Pilot model and DTOs.

use gunpla_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `pilots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pilot {
    pub id: DbId,
    pub name: String,
    pub series_id: Option<DbId>,
    pub affiliation_note: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePilot {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub series_id: Option<DbId>,
    #[validate(length(max = 200))]
    pub affiliation_note: Option<String>,
    pub bio: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePilot {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub series_id: Option<DbId>,
    #[validate(length(max = 200))]
    pub affiliation_note: Option<String>,
    pub bio: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
