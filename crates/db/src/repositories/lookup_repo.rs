//! Autocomplete lookups across the catalog tables.

use gunpla_core::catalog::LookupEntity;
use gunpla_core::search::{build_like_pattern, build_prefix_pattern};
use sqlx::PgPool;

use crate::models::lookup::LookupItem;

/// Provides `(id, name)` suggestions for the admin autocomplete inputs.
pub struct LookupRepo;

impl LookupRepo {
    /// Suggest rows of `entity` whose name contains `query`.
    ///
    /// Names starting with the query rank ahead of inner matches. Inactive
    /// rows are never suggested. A `None` query returns the first `limit`
    /// rows by name.
    pub async fn suggest(
        pool: &PgPool,
        entity: LookupEntity,
        query: Option<&str>,
        limit: i64,
    ) -> Result<Vec<LookupItem>, sqlx::Error> {
        let table = entity.table_name();
        let active_clause = if entity.is_soft_deletable() {
            "AND is_active = true"
        } else {
            ""
        };
        let sql = format!(
            "SELECT id, name FROM {table} \
             WHERE ($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\') {active_clause} \
             ORDER BY CASE WHEN $2::TEXT IS NOT NULL AND name ILIKE $2 ESCAPE '\\' \
                           THEN 0 ELSE 1 END, \
                      name, id \
             LIMIT $3"
        );
        sqlx::query_as::<_, LookupItem>(&sql)
            .bind(query.map(build_like_pattern))
            .bind(query.map(build_prefix_pattern))
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
