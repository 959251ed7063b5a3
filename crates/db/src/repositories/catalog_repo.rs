//! Aggregate queries backing the public home page.

use sqlx::PgPool;

use crate::models::catalog::CatalogCounts;

/// Read-only catalog statistics.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Count active rows of every browsable entity in one round trip.
    pub async fn counts(pool: &PgPool) -> Result<CatalogCounts, sqlx::Error> {
        sqlx::query_as::<_, CatalogCounts>(
            "SELECT \
                (SELECT COUNT(*) FROM kits WHERE is_active = true) AS kits, \
                (SELECT COUNT(*) FROM mobile_suits WHERE is_active = true) AS mobile_suits, \
                (SELECT COUNT(*) FROM pilots WHERE is_active = true) AS pilots, \
                (SELECT COUNT(*) FROM factions WHERE is_active = true) AS factions, \
                (SELECT COUNT(*) FROM organizations WHERE is_active = true) AS organizations",
        )
        .fetch_one(pool)
        .await
    }
}
