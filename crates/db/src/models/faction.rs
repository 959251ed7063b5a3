//! Faction model and DTOs.

use gunpla_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `factions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Faction {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub emblem_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFaction {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub emblem_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFaction {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub emblem_url: Option<String>,
    pub is_active: Option<bool>,
}
