//! Repository for the `companies` table.

use gunpla_core::pagination::PageRequest;
use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::common::ListFilter;
use crate::models::company::{Company, CreateCompany, UpdateCompany};

const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// Shared `WHERE` clause for list and count: `$1` search pattern, `$2` include_inactive.
const FILTER: &str = "($1::TEXT IS NULL OR name ILIKE $1 ESCAPE '\\') \
                      AND ($2 OR is_active = true)";

/// Provides CRUD operations for companies. Deleting a company deactivates it.
pub struct CompanyRepo;

impl CompanyRepo {
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a company by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of companies ordered by name.
    pub async fn list(
        pool: &PgPool,
        filter: &ListFilter,
        page: PageRequest,
    ) -> Result<Vec<Company>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM companies WHERE {FILTER} \
             ORDER BY name, id LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Total rows matching `filter`, for pagination metadata.
    pub async fn count(pool: &PgPool, filter: &ListFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM companies WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.search_pattern)
            .bind(filter.include_inactive)
            .fetch_one(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                is_active = COALESCE($4, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a company (set is_active = false). Returns `true` if a row
    /// changed; already-inactive rows return `false`.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE companies SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
