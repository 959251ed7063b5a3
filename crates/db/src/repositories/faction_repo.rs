//! Repository for the `factions` table.

use gunpla_core::pagination::PageRequest;
use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::common::ListFilter;
use crate::models::faction::{CreateFaction, Faction, UpdateFaction};

const COLUMNS: &str = "id, name, description, emblem_url, is_active, created_at, updated_at";

/// `$1` search pattern, `$2` include_inactive.
const FILTER: &str = "($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\') \
                      AND ($2 OR is_active = true)";

/// Provides CRUD operations for factions. Deleting a faction deactivates it.
pub struct FactionRepo;

impl FactionRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaction) -> Result<Faction, sqlx::Error> {
        let query = format!(
            "INSERT INTO factions (name, description, emblem_url) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faction>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.emblem_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM factions WHERE id = $1");
        sqlx::query_as::<_, Faction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: PageRequest,
    ) -> Result<Vec<Faction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM factions WHERE {FILTER} \
             ORDER BY name, id LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Faction>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM factions WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaction,
    ) -> Result<Option<Faction>, sqlx::Error> {
        let query = format!(
            "UPDATE factions SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                emblem_url = COALESCE($4, emblem_url), \
                is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faction>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.emblem_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE factions SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
