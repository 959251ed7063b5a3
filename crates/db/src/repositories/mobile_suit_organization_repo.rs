//! Repository for the `mobile_suit_organizations` join table.

use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::mobile_suit::MobileSuit;
use crate::models::organization::Organization;

/// Links mobile suits to the organizations that field them.
pub struct MobileSuitOrganizationRepo;

impl MobileSuitOrganizationRepo {
    /// Returns `true` if a new link was created, `false` if it already existed.
    pub async fn link(
        pool: &PgPool,
        mobile_suit_id: DbId,
        organization_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO mobile_suit_organizations (mobile_suit_id, organization_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(mobile_suit_id)
        .bind(organization_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn unlink(
        pool: &PgPool,
        mobile_suit_id: DbId,
        organization_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM mobile_suit_organizations \
             WHERE mobile_suit_id = $1 AND organization_id = $2",
        )
        .bind(mobile_suit_id)
        .bind(organization_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn organizations_for_mobile_suit(
        pool: &PgPool,
        mobile_suit_id: DbId,
        active_only: bool,
    ) -> Result<Vec<Organization>, sqlx::Error> {
        sqlx::query_as::<_, Organization>(
            "SELECT o.* FROM organizations o \
             JOIN mobile_suit_organizations mso ON mso.organization_id = o.id \
             WHERE mso.mobile_suit_id = $1 AND (NOT $2 OR o.is_active = true) \
             ORDER BY o.name, o.id",
        )
        .bind(mobile_suit_id)
        .bind(active_only)
        .fetch_all(pool)
        .await
    }

    pub async fn mobile_suits_for_organization(
        pool: &PgPool,
        organization_id: DbId,
        active_only: bool,
    ) -> Result<Vec<MobileSuit>, sqlx::Error> {
        sqlx::query_as::<_, MobileSuit>(
            "SELECT ms.* FROM mobile_suits ms \
             JOIN mobile_suit_organizations mso ON mso.mobile_suit_id = ms.id \
             WHERE mso.organization_id = $1 AND (NOT $2 OR ms.is_active = true) \
             ORDER BY ms.name, ms.id",
        )
        .bind(organization_id)
        .bind(active_only)
        .fetch_all(pool)
        .await
    }
}
