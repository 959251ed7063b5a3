//! Repository for the `kits` table.
//!
//! Listing queries join grade, series and mobile suit names so a page of
//! kit cards is a single round trip.

use gunpla_core::catalog::KitSort;
use gunpla_core::pagination::PageRequest;
use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::kit::{CreateKit, Kit, KitFilter, KitListItem, UpdateKit};

const COLUMNS: &str = "id, name, product_code, grade_id, series_id, brand_id, mobile_suit_id, \
                       scale, release_date, price_yen, description, image_url, is_active, \
                       created_at, updated_at";

/// `SELECT ... FROM` prefix producing [`KitListItem`] rows; kits aliased as `k`.
const LIST_SELECT: &str = "\
    SELECT k.id, k.name, k.product_code, \
           k.grade_id, g.code AS grade_code, g.name AS grade_name, \
           k.series_id, s.name AS series_name, \
           k.mobile_suit_id, ms.name AS mobile_suit_name, \
           k.scale, k.release_date, k.price_yen, k.image_url, k.is_active, k.created_at \
    FROM kits k \
    JOIN grades g ON g.id = k.grade_id \
    LEFT JOIN series s ON s.id = k.series_id \
    LEFT JOIN mobile_suits ms ON ms.id = k.mobile_suit_id";

/// Shared `WHERE` clause for search and count.
///
/// `$1` pattern, `$2` grade ids, `$3` series, `$4` brand, `$5` mobile suit,
/// `$6` include_inactive.
const FILTER: &str = "\
    ($1::TEXT IS NULL OR k.name ILIKE $1 ESCAPE '\\' OR k.product_code ILIKE $1 ESCAPE '\\') \
    AND (cardinality($2::BIGINT[]) = 0 OR k.grade_id = ANY($2)) \
    AND ($3::BIGINT IS NULL OR k.series_id = $3) \
    AND ($4::BIGINT IS NULL OR k.brand_id = $4) \
    AND ($5::BIGINT IS NULL OR k.mobile_suit_id = $5) \
    AND ($6 OR k.is_active = true)";

/// Provides CRUD and catalog queries for kits. Deleting deactivates.
pub struct KitRepo;

impl KitRepo {
    pub async fn create(pool: &PgPool, input: &CreateKit) -> Result<Kit, sqlx::Error> {
        let query = format!(
            "INSERT INTO kits \
                (name, product_code, grade_id, series_id, brand_id, mobile_suit_id, \
                 scale, release_date, price_yen, description, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kit>(&query)
            .bind(&input.name)
            .bind(&input.product_code)
            .bind(input.grade_id)
            .bind(input.series_id)
            .bind(input.brand_id)
            .bind(input.mobile_suit_id)
            .bind(&input.scale)
            .bind(input.release_date)
            .bind(input.price_yen)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find a kit by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Kit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kits WHERE id = $1");
        sqlx::query_as::<_, Kit>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of kits matching `filter`, in the requested order.
    pub async fn search(
        pool: &PgPool,
        filter: &KitFilter,
        sort: KitSort,
        page: PageRequest,
    ) -> Result<Vec<KitListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} WHERE {FILTER} ORDER BY {} LIMIT $7 OFFSET $8",
            sort.order_by_clause()
        );
        sqlx::query_as::<_, KitListItem>(&query)
            .bind(&filter.search_pattern)
            .bind(&filter.grade_ids)
            .bind(filter.series_id)
            .bind(filter.brand_id)
            .bind(filter.mobile_suit_id)
            .bind(filter.include_inactive)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await
    }

    /// Total kits matching `filter`.
    pub async fn count(pool: &PgPool, filter: &KitFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM kits k WHERE {FILTER}");
        sqlx::query_scalar::<_, i64>(&query)
            .bind(&filter.search_pattern)
            .bind(&filter.grade_ids)
            .bind(filter.series_id)
            .bind(filter.brand_id)
            .bind(filter.mobile_suit_id)
            .bind(filter.include_inactive)
            .fetch_one(pool)
            .await
    }

    /// Active kits related to `kit`: same mobile suit first, then same
    /// series, newest first within each group. The kit itself is excluded.
    pub async fn related(
        pool: &PgPool,
        kit: &Kit,
        limit: i64,
    ) -> Result<Vec<KitListItem>, sqlx::Error> {
        if kit.mobile_suit_id.is_none() && kit.series_id.is_none() {
            return Ok(Vec::new());
        }
        let query = format!(
            "{LIST_SELECT} \
             WHERE k.id <> $1 \
               AND k.is_active = true \
               AND (k.mobile_suit_id = $2::BIGINT OR k.series_id = $3::BIGINT) \
             ORDER BY CASE WHEN k.mobile_suit_id = $2::BIGINT THEN 0 ELSE 1 END, \
                      k.created_at DESC, k.id DESC \
             LIMIT $4"
        );
        sqlx::query_as::<_, KitListItem>(&query)
            .bind(kit.id)
            .bind(kit.mobile_suit_id)
            .bind(kit.series_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Most recently added active kits.
    pub async fn latest(pool: &PgPool, limit: i64) -> Result<Vec<KitListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} WHERE k.is_active = true \
             ORDER BY {} LIMIT $1",
            KitSort::Newest.order_by_clause()
        );
        sqlx::query_as::<_, KitListItem>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All active kits of one mobile suit, by release date.
    pub async fn list_by_mobile_suit(
        pool: &PgPool,
        mobile_suit_id: DbId,
    ) -> Result<Vec<KitListItem>, sqlx::Error> {
        let query = format!(
            "{LIST_SELECT} WHERE k.mobile_suit_id = $1 AND k.is_active = true \
             ORDER BY {}",
            KitSort::ReleaseDate.order_by_clause()
        );
        sqlx::query_as::<_, KitListItem>(&query)
            .bind(mobile_suit_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKit,
    ) -> Result<Option<Kit>, sqlx::Error> {
        let query = format!(
            "UPDATE kits SET \
                name = COALESCE($2, name), \
                product_code = COALESCE($3, product_code), \
                grade_id = COALESCE($4, grade_id), \
                series_id = COALESCE($5, series_id), \
                brand_id = COALESCE($6, brand_id), \
                mobile_suit_id = COALESCE($7, mobile_suit_id), \
                scale = COALESCE($8, scale), \
                release_date = COALESCE($9, release_date), \
                price_yen = COALESCE($10, price_yen), \
                description = COALESCE($11, description), \
                image_url = COALESCE($12, image_url), \
                is_active = COALESCE($13, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kit>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.product_code)
            .bind(input.grade_id)
            .bind(input.series_id)
            .bind(input.brand_id)
            .bind(input.mobile_suit_id)
            .bind(&input.scale)
            .bind(input.release_date)
            .bind(input.price_yen)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE kits SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
