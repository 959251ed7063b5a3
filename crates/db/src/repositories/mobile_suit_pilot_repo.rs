//! Repository for the `mobile_suit_pilots` join table.

use gunpla_core::types::DbId;
use sqlx::PgPool;

use crate::models::mobile_suit::MobileSuit;
use crate::models::pilot::Pilot;

/// Links pilots to the mobile suits they fly. Links are hard-deleted.
pub struct MobileSuitPilotRepo;

impl MobileSuitPilotRepo {
    /// Link a pilot to a mobile suit. Returns `true` if a new link was
    /// created, `false` if it already existed.
    pub async fn link(
        pool: &PgPool,
        mobile_suit_id: DbId,
        pilot_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO mobile_suit_pilots (mobile_suit_id, pilot_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(mobile_suit_id)
        .bind(pilot_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a link. Returns `true` if a row was deleted.
    pub async fn unlink(
        pool: &PgPool,
        mobile_suit_id: DbId,
        pilot_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM mobile_suit_pilots WHERE mobile_suit_id = $1 AND pilot_id = $2",
        )
        .bind(mobile_suit_id)
        .bind(pilot_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pilots of a mobile suit, by name.
    pub async fn pilots_for_mobile_suit(
        pool: &PgPool,
        mobile_suit_id: DbId,
        active_only: bool,
    ) -> Result<Vec<Pilot>, sqlx::Error> {
        sqlx::query_as::<_, Pilot>(
            "SELECT p.* FROM pilots p \
             JOIN mobile_suit_pilots msp ON msp.pilot_id = p.id \
             WHERE msp.mobile_suit_id = $1 AND (NOT $2 OR p.is_active = true) \
             ORDER BY p.name, p.id",
        )
        .bind(mobile_suit_id)
        .bind(active_only)
        .fetch_all(pool)
        .await
    }

    /// Mobile suits a pilot flies, by name.
    pub async fn mobile_suits_for_pilot(
        pool: &PgPool,
        pilot_id: DbId,
        active_only: bool,
    ) -> Result<Vec<MobileSuit>, sqlx::Error> {
        sqlx::query_as::<_, MobileSuit>(
            "SELECT ms.* FROM mobile_suits ms \
             JOIN mobile_suit_pilots msp ON msp.mobile_suit_id = ms.id \
             WHERE msp.pilot_id = $1 AND (NOT $2 OR ms.is_active = true) \
             ORDER BY ms.name, ms.id",
        )
        .bind(pilot_id)
        .bind(active_only)
        .fetch_all(pool)
        .await
    }
}
