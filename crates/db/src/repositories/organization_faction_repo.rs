//! Repository for the `organization_factions` join table.

use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::faction::Faction;
use crate::models::organization::Organization;

/// Links organizations to the factions they belong to.
pub struct OrganizationFactionRepo;

impl OrganizationFactionRepo {
    /// Returns `true` if a new link was created, `false` if it already existed.
    pub async fn link(
        pool: &PgPool,
        organization_id: DbId,
        faction_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO organization_factions (organization_id, faction_id) \
             VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(organization_id)
        .bind(faction_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn unlink(
        pool: &PgPool,
        organization_id: DbId,
        faction_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM organization_factions WHERE organization_id = $1 AND faction_id = $2",
        )
        .bind(organization_id)
        .bind(faction_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn factions_for_organization(
        pool: &PgPool,
        organization_id: DbId,
        active_only: bool,
    ) -> Result<Vec<Faction>, sqlx::Error> {
        sqlx::query_as::<_, Faction>(
            "SELECT f.* FROM factions f \
             JOIN organization_factions ofa ON ofa.faction_id = f.id \
             WHERE ofa.organization_id = $1 AND (NOT $2 OR f.is_active = true) \
             ORDER BY f.name, f.id",
        )
        .bind(organization_id)
        .bind(active_only)
        .fetch_all(pool)
        .await
    }

    /// Distinct active factions of any of the given organizations, by name.
    pub async fn factions_for_organizations(
        pool: &PgPool,
        organization_ids: &[DbId],
    ) -> Result<Vec<Faction>, sqlx::Error> {
        if organization_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Faction>(
            "SELECT f.* FROM factions f \
             WHERE f.is_active = true \
               AND EXISTS (SELECT 1 FROM organization_factions ofa \
                           WHERE ofa.faction_id = f.id AND ofa.organization_id = ANY($1)) \
             ORDER BY f.name, f.id",
        )
        .bind(organization_ids)
        .fetch_all(pool)
        .await
    }

    pub async fn organizations_for_faction(
        pool: &PgPool,
        faction_id: DbId,
        active_only: bool,
    ) -> Result<Vec<Organization>, sqlx::Error> {
        sqlx::query_as::<_, Organization>(
            "SELECT o.* FROM organizations o \
             JOIN organization_factions ofa ON ofa.organization_id = o.id \
             WHERE ofa.faction_id = $1 AND (NOT $2 OR o.is_active = true) \
             ORDER BY o.name, o.id",
        )
        .bind(faction_id)
        .bind(active_only)
        .fetch_all(pool)
        .await
    }
}
