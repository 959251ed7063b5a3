//! Mobile suit model and DTOs.

use gunpla_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `mobile_suits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MobileSuit {
    pub id: DbId,
    pub name: String,
    pub model_number: String,
    pub series_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub description: Option<String>,
    pub height_m: Option<f64>,
    pub weight_t: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMobileSuit {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub model_number: String,
    pub series_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub height_m: Option<f64>,
    #[validate(range(min = 0.0))]
    pub weight_t: Option<f64>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMobileSuit {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub model_number: Option<String>,
    pub series_id: Option<DbId>,
    pub company_id: Option<DbId>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub height_m: Option<f64>,
    #[validate(range(min = 0.0))]
    pub weight_t: Option<f64>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
