//! Repository for the `mobile_suits` table.

use gunpla_core::pagination::PageRequest;
use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::common::ListFilter;
use crate::models::mobile_suit::{CreateMobileSuit, MobileSuit, UpdateMobileSuit};

const COLUMNS: &str = "id, name, model_number, series_id, company_id, description, \
                       height_m, weight_t, image_url, is_active, created_at, updated_at";

/// `$1` search pattern (name or model number), `$2` include_inactive, `$3` series id.
const FILTER: &str = "($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\' \
                          OR model_number ILIKE $1 ESCAPE '\\') \
                      AND ($2 OR is_active = true) \
                      AND ($3::BIGINT IS NULL OR series_id = $3)";

/// Provides CRUD operations for mobile suits. Deleting deactivates.
pub struct MobileSuitRepo;

impl MobileSuitRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateMobileSuit,
    ) -> Result<MobileSuit, sqlx::Error> {
        let query = format!(
            "INSERT INTO mobile_suits \
                (name, model_number, series_id, company_id, description, height_m, weight_t, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MobileSuit>(&query)
            .bind(&input.name)
            .bind(&input.model_number)
            .bind(input.series_id)
            .bind(input.company_id)
            .bind(&input.description)
            .bind(input.height_m)
            .bind(input.weight_t)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MobileSuit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mobile_suits WHERE id = $1");
        sqlx::query_as::<_, MobileSuit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: PageRequest,
    ) -> Result<Vec<MobileSuit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM mobile_suits WHERE {FILTER} \
             ORDER BY name, id LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, MobileSuit>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .bind(filter.series_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM mobile_suits WHERE {FILTER}");
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
        input: &UpdateMobileSuit,
    ) -> Result<Option<MobileSuit>, sqlx::Error> {
        let query = format!(
            "UPDATE mobile_suits SET \
                name = COALESCE($2, name), \
                model_number = COALESCE($3, model_number), \
                series_id = COALESCE($4, series_id), \
                company_id = COALESCE($5, company_id), \
                description = COALESCE($6, description), \
                height_m = COALESCE($7, height_m), \
                weight_t = COALESCE($8, weight_t), \
                image_url = COALESCE($9, image_url), \
                is_active = COALESCE($10, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MobileSuit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.model_number)
            .bind(input.series_id)
            .bind(input.company_id)
            .bind(&input.description)
            .bind(input.height_m)
            .bind(input.weight_t)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE mobile_suits SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
