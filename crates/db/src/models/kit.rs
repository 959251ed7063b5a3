//! Kit model, DTOs, list filter, and the assembled kit-detail view.

use chrono::NaiveDate;
use gunpla_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::brand::Brand;
use crate::models::faction::Faction;
use crate::models::grade::Grade;
use crate::models::mobile_suit::MobileSuit;
use crate::models::organization::Organization;
use crate::models::pilot::Pilot;
use crate::models::series::Series;

/// A row from the `kits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Kit {
    pub id: DbId,
    pub name: String,
    pub product_code: Option<String>,
    pub grade_id: DbId,
    pub series_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub mobile_suit_id: Option<DbId>,
    pub scale: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub price_yen: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Kit row joined with the display names the listing cards need.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct KitListItem {
    pub id: DbId,
    pub name: String,
    pub product_code: Option<String>,
    pub grade_id: DbId,
    pub grade_code: String,
    pub grade_name: String,
    pub series_id: Option<DbId>,
    pub series_name: Option<String>,
    pub mobile_suit_id: Option<DbId>,
    pub mobile_suit_name: Option<String>,
    pub scale: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub price_yen: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKit {
    #[validate(length(min = 1, max = 300))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub product_code: Option<String>,
    pub grade_id: DbId,
    pub series_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub mobile_suit_id: Option<DbId>,
    #[validate(length(max = 16))]
    pub scale: Option<String>,
    pub release_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub price_yen: Option<i32>,
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateKit {
    #[validate(length(min = 1, max = 300))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub product_code: Option<String>,
    pub grade_id: Option<DbId>,
    pub series_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub mobile_suit_id: Option<DbId>,
    #[validate(length(max = 16))]
    pub scale: Option<String>,
    pub release_date: Option<NaiveDate>,
    #[validate(range(min = 0))]
    pub price_yen: Option<i32>,
    pub description: Option<String>,
    #[validate(length(max = 500))]
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Filters for the kit listing. All conditions are AND-ed.
#[derive(Debug, Clone, Default)]
pub struct KitFilter {
    /// Escaped `ILIKE` pattern matched against name and product code.
    pub search_pattern: Option<String>,
    /// Badge filter: kit grade must be one of these. Empty means any.
    pub grade_ids: Vec<DbId>,
    pub series_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub mobile_suit_id: Option<DbId>,
    pub include_inactive: bool,
}

/// Everything the kit-detail page shows, stitched from several lookups.
#[derive(Debug, Clone, Serialize)]
pub struct KitDetail {
    pub kit: Kit,
    pub grade: Option<Grade>,
    pub series: Option<Series>,
    pub brand: Option<Brand>,
    pub mobile_suit: Option<MobileSuit>,
    pub pilots: Vec<Pilot>,
    pub organizations: Vec<Organization>,
    pub factions: Vec<Faction>,
    pub related_kits: Vec<KitListItem>,
}
