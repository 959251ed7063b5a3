//! Repository for the `grades` table.

use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::grade::{CreateGrade, Grade, UpdateGrade};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, code, scale, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for grades. Grades are hard-deleted.
pub struct GradeRepo;

impl GradeRepo {
    /// Insert a new grade, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGrade) -> Result<Grade, sqlx::Error> {
        let query = format!(
            "INSERT INTO grades (name, code, scale, description, sort_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Grade>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.scale)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Grade>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM grades WHERE id = $1");
        sqlx::query_as::<_, Grade>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List grades ordered by `sort_order`, then name. The optional pattern
    /// matches name or code.
    pub async fn list(
        pool: &PgPool,
        search_pattern: Option<&str>,
    ) -> Result<Vec<Grade>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM grades \
             WHERE ($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\' OR code ILIKE $1 ESCAPE '\\') \
             ORDER BY sort_order, name"
        );
        sqlx::query_as::<_, Grade>(&query)
            .bind(search_pattern)
            .fetch_all(pool)
            .await
    }

    /// Update a grade. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGrade,
    ) -> Result<Option<Grade>, sqlx::Error> {
        let query = format!(
            "UPDATE grades SET \
                name = COALESCE($2, name), \
                code = COALESCE($3, code), \
                scale = COALESCE($4, scale), \
                description = COALESCE($5, description), \
                sort_order = COALESCE($6, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Grade>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.scale)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a grade. Fails with a foreign-key violation while
    /// kits still reference it. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM grades WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
