//! Home-page summary types.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::kit::KitListItem;

/// Active row counts per browsable entity.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogCounts {
    pub kits: i64,
    pub mobile_suits: i64,
    pub pilots: i64,
    pub factions: i64,
    pub organizations: i64,
}

/// Payload of `GET /catalog/summary`.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub counts: CatalogCounts,
    pub latest_kits: Vec<KitListItem>,
}
