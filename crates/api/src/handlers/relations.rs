//! Handlers for the many-to-many relation tables.
//!
//! Linking requires both rows to exist (active or not). Re-linking an
//! existing pair answers 200 instead of 201 and changes nothing; unlinking a
//! missing pair is a 404. Linking answers with the updated list; unlinking
//! answers 204 with no body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::faction::Faction;
use gunpla_db::models::organization::Organization;
use gunpla_db::models::pilot::Pilot;
use gunpla_db::repositories::{
    FactionRepo, MobileSuitOrganizationRepo, MobileSuitPilotRepo, MobileSuitRepo,
    OrganizationFactionRepo, OrganizationRepo, PilotRepo,
};
use gunpla_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkPilotRequest {
    pub pilot_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct LinkOrganizationRequest {
    pub organization_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct LinkFactionRequest {
    pub faction_id: DbId,
}

fn link_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}

// ---------------------------------------------------------------------------
// Existence checks
// ---------------------------------------------------------------------------

async fn ensure_mobile_suit(pool: &DbPool, id: DbId) -> AppResult<()> {
    MobileSuitRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MobileSuit",
            id,
        }))?;
    Ok(())
}

async fn ensure_pilot(pool: &DbPool, id: DbId) -> AppResult<()> {
    PilotRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pilot", id }))?;
    Ok(())
}

async fn ensure_organization(pool: &DbPool, id: DbId) -> AppResult<()> {
    OrganizationRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;
    Ok(())
}

async fn ensure_faction(pool: &DbPool, id: DbId) -> AppResult<()> {
    FactionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Faction",
            id,
        }))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Mobile suit <-> pilot
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/mobile-suits/{id}/pilots
pub async fn list_pilots(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(mobile_suit_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Pilot>>>> {
    ensure_mobile_suit(&state.pool, mobile_suit_id).await?;
    let pilots =
        MobileSuitPilotRepo::pilots_for_mobile_suit(&state.pool, mobile_suit_id, false).await?;
    Ok(Json(DataResponse { data: pilots }))
}

/// POST /api/v1/admin/mobile-suits/{id}/pilots
pub async fn link_pilot(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(mobile_suit_id): Path<DbId>,
    Json(input): Json<LinkPilotRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Pilot>>>)> {
    ensure_mobile_suit(&state.pool, mobile_suit_id).await?;
    ensure_pilot(&state.pool, input.pilot_id).await?;

    let created = MobileSuitPilotRepo::link(&state.pool, mobile_suit_id, input.pilot_id).await?;
    if created {
        tracing::info!(
            mobile_suit_id,
            pilot_id = input.pilot_id,
            user_id = user.user_id,
            "Pilot linked to mobile suit"
        );
    }

    let pilots =
        MobileSuitPilotRepo::pilots_for_mobile_suit(&state.pool, mobile_suit_id, false).await?;
    Ok((link_status(created), Json(DataResponse { data: pilots })))
}

/// DELETE /api/v1/admin/mobile-suits/{id}/pilots/{pilot_id}
pub async fn unlink_pilot(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path((mobile_suit_id, pilot_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if !MobileSuitPilotRepo::unlink(&state.pool, mobile_suit_id, pilot_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MobileSuitPilot",
            id: pilot_id,
        }));
    }
    tracing::info!(
        mobile_suit_id,
        pilot_id,
        user_id = user.user_id,
        "Pilot unlinked from mobile suit"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Mobile suit <-> organization
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/mobile-suits/{id}/organizations
pub async fn list_organizations(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(mobile_suit_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Organization>>>> {
    ensure_mobile_suit(&state.pool, mobile_suit_id).await?;
    let organizations = MobileSuitOrganizationRepo::organizations_for_mobile_suit(
        &state.pool,
        mobile_suit_id,
        false,
    )
    .await?;
    Ok(Json(DataResponse {
        data: organizations,
    }))
}

/// POST /api/v1/admin/mobile-suits/{id}/organizations
pub async fn link_organization(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(mobile_suit_id): Path<DbId>,
    Json(input): Json<LinkOrganizationRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Organization>>>)> {
    ensure_mobile_suit(&state.pool, mobile_suit_id).await?;
    ensure_organization(&state.pool, input.organization_id).await?;

    let created =
        MobileSuitOrganizationRepo::link(&state.pool, mobile_suit_id, input.organization_id)
            .await?;
    if created {
        tracing::info!(
            mobile_suit_id,
            organization_id = input.organization_id,
            user_id = user.user_id,
            "Organization linked to mobile suit"
        );
    }

    let organizations = MobileSuitOrganizationRepo::organizations_for_mobile_suit(
        &state.pool,
        mobile_suit_id,
        false,
    )
    .await?;
    Ok((
        link_status(created),
        Json(DataResponse {
            data: organizations,
        }),
    ))
}

/// DELETE /api/v1/admin/mobile-suits/{id}/organizations/{organization_id}
pub async fn unlink_organization(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path((mobile_suit_id, organization_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if !MobileSuitOrganizationRepo::unlink(&state.pool, mobile_suit_id, organization_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MobileSuitOrganization",
            id: organization_id,
        }));
    }
    tracing::info!(
        mobile_suit_id,
        organization_id,
        user_id = user.user_id,
        "Organization unlinked from mobile suit"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Organization <-> faction
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/organizations/{id}/factions
pub async fn list_factions(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(organization_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Faction>>>> {
    ensure_organization(&state.pool, organization_id).await?;
    let factions =
        OrganizationFactionRepo::factions_for_organization(&state.pool, organization_id, false)
            .await?;
    Ok(Json(DataResponse { data: factions }))
}

/// POST /api/v1/admin/organizations/{id}/factions
pub async fn link_faction(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(organization_id): Path<DbId>,
    Json(input): Json<LinkFactionRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<Faction>>>)> {
    ensure_organization(&state.pool, organization_id).await?;
    ensure_faction(&state.pool, input.faction_id).await?;

    let created =
        OrganizationFactionRepo::link(&state.pool, organization_id, input.faction_id).await?;
    if created {
        tracing::info!(
            organization_id,
            faction_id = input.faction_id,
            user_id = user.user_id,
            "Faction linked to organization"
        );
    }

    let factions =
        OrganizationFactionRepo::factions_for_organization(&state.pool, organization_id, false)
            .await?;
    Ok((link_status(created), Json(DataResponse { data: factions })))
}

/// DELETE /api/v1/admin/organizations/{id}/factions/{faction_id}
pub async fn unlink_faction(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path((organization_id, faction_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if !OrganizationFactionRepo::unlink(&state.pool, organization_id, faction_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "OrganizationFaction",
            id: faction_id,
        }));
    }
    tracing::info!(
        organization_id,
        faction_id,
        user_id = user.user_id,
        "Faction unlinked from organization"
    );
    Ok(StatusCode::NO_CONTENT)
}
