//! Repository for the `series` table.

use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::series::{CreateSeries, Series, UpdateSeries};

const COLUMNS: &str = "id, name, timeline, start_year, description, created_at, updated_at";

/// Provides CRUD operations for series. Series are hard-deleted; dependent
/// rows keep existing with `series_id = NULL`.
pub struct SeriesRepo;

impl SeriesRepo {
    pub async fn create(pool: &PgPool, input: &CreateSeries) -> Result<Series, sqlx::Error> {
        let query = format!(
            "INSERT INTO series (name, timeline, start_year, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(&input.name)
            .bind(&input.timeline)
            .bind(input.start_year)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List series by start year (unknown years last), then name.
    pub async fn list(
        pool: &PgPool,
        search_pattern: Option<&str>,
    ) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series \
             WHERE ($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\') \
             ORDER BY start_year NULLS LAST, name"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(search_pattern)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSeries,
    ) -> Result<Option<Series>, sqlx::Error> {
        let query = format!(
            "UPDATE series SET \
                name = COALESCE($2, name), \
                timeline = COALESCE($3, timeline), \
                start_year = COALESCE($4, start_year), \
                description = COALESCE($5, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.timeline)
            .bind(input.start_year)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
