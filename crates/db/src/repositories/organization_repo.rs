//! Repository for the `organizations` table.

use gunpla_core::pagination::PageRequest;
use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::common::ListFilter;
use crate::models::organization::{CreateOrganization, Organization, UpdateOrganization};

const COLUMNS: &str = "id, name, description, series_id, is_active, created_at, updated_at";

/// `$1` search pattern, `$2` include_inactive, `$3` series id.
const FILTER: &str = "($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\') \
                      AND ($2 OR is_active = true) \
                      AND ($3::BIGINT IS NULL OR series_id = $3)";

/// Provides CRUD operations for organizations. Deleting deactivates.
pub struct OrganizationRepo;

impl OrganizationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateOrganization,
    ) -> Result<Organization, sqlx::Error> {
        let query = format!(
            "INSERT INTO organizations (name, description, series_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.series_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM organizations WHERE id = $1");
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: PageRequest,
    ) -> Result<Vec<Organization>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM organizations WHERE {FILTER} \
             ORDER BY name, id LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .bind(filter.series_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM organizations WHERE {FILTER}");
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
        input: &UpdateOrganization,
    ) -> Result<Option<Organization>, sqlx::Error> {
        let query = format!(
            "UPDATE organizations SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                series_id = COALESCE($4, series_id), \
                is_active = COALESCE($5, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Organization>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.series_id)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE organizations SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
