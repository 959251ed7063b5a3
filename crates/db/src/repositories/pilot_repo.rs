//! Repository for the `pilots` table.

use gunpla_core::pagination::PageRequest;
use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::common::ListFilter;
use crate::models::pilot::{CreatePilot, Pilot, UpdatePilot};

const COLUMNS: &str = "id, name, series_id, affiliation_note, bio, image_url, \
                       is_active, created_at, updated_at";

/// `$1` search pattern, `$2` include_inactive, `$3` series id.
const FILTER: &str = "($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\') \
                      AND ($2 OR is_active = true) \
                      AND ($3::BIGINT IS NULL OR series_id = $3)";

/// Provides CRUD operations for pilots. Deleting deactivates.
pub struct PilotRepo;

impl PilotRepo {
    pub async fn create(pool: &PgPool, input: &CreatePilot) -> Result<Pilot, sqlx::Error> {
        let query = format!(
            "INSERT INTO pilots (name, series_id, affiliation_note, bio, image_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pilot>(&query)
            .bind(&input.name)
            .bind(input.series_id)
            .bind(&input.affiliation_note)
            .bind(&input.bio)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pilot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pilots WHERE id = $1");
        sqlx::query_as::<_, Pilot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: PageRequest,
    ) -> Result<Vec<Pilot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pilots WHERE {FILTER} \
             ORDER BY name, id LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Pilot>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .bind(filter.series_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM pilots WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .bind(filter.series_id)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePilot,
    ) -> Result<Option<Pilot>, sqlx::Error> {
        let query = format!(
            "UPDATE pilots SET \
                name = COALESCE($2, name), \
                series_id = COALESCE($3, series_id), \
                affiliation_note = COALESCE($4, affiliation_note), \
                bio = COALESCE($5, bio), \
                image_url = COALESCE($6, image_url), \
                is_active = COALESCE($7, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pilot>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.series_id)
            .bind(&input.affiliation_note)
            .bind(&input.bio)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE pilots SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
