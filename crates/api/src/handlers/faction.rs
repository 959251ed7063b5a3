//! Handlers for the `/factions` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::common::ListFilter;
use gunpla_db::models::faction::{CreateFaction, Faction, UpdateFaction};
use gunpla_db::models::organization::Organization;
use gunpla_db::repositories::{FactionRepo, OrganizationFactionRepo};
use serde::Serialize;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::ListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Public faction page: the faction and its active organizations.
#[derive(Debug, Serialize)]
pub struct FactionDetail {
    pub faction: Faction,
    pub organizations: Vec<Organization>,
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/factions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Faction>>> {
    list_page(&state, &params.public_filter(), &params).await
}

/// GET /api/v1/factions/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FactionDetail>>> {
    let faction = FactionRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|f| f.is_active)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Faction",
            id,
        }))?;
    let organizations =
        OrganizationFactionRepo::organizations_for_faction(&state.pool, id, true).await?;

    Ok(Json(DataResponse {
        data: FactionDetail {
            faction,
            organizations,
        },
    }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/factions
pub async fn admin_list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Faction>>> {
    list_page(&state, &params.admin_filter(), &params).await
}

/// POST /api/v1/admin/factions
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateFaction>,
) -> AppResult<(StatusCode, Json<DataResponse<Faction>>)> {
    validate_input(&input)?;
    let faction = FactionRepo::create(&state.pool, &input).await?;
    tracing::info!(faction_id = faction.id, user_id = user.user_id, "Faction created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: faction })))
}

/// GET /api/v1/admin/factions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Faction>>> {
    let faction = FactionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Faction",
            id,
        }))?;
    Ok(Json(DataResponse { data: faction }))
}

/// PUT /api/v1/admin/factions/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaction>,
) -> AppResult<Json<DataResponse<Faction>>> {
    validate_input(&input)?;
    let faction = FactionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Faction",
            id,
        }))?;
    tracing::info!(faction_id = id, user_id = user.user_id, "Faction updated");
    Ok(Json(DataResponse { data: faction }))
}

/// DELETE /api/v1/admin/factions/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !FactionRepo::deactivate(&state.pool, id).await? {
        FactionRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Faction",
                id,
            }))?;
    }
    tracing::info!(faction_id = id, user_id = user.user_id, "Faction deactivated");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_page(
    state: &AppState,
    filter: &ListFilter,
    params: &ListParams,
) -> AppResult<Json<PaginatedResponse<Faction>>> {
    let page = params.page_request();
    let (items, total) = tokio::try_join!(
        FactionRepo::list(&state.pool, filter, page),
        FactionRepo::count(&state.pool, filter),
    )?;
    Ok(Json(PaginatedResponse::new(items, page, total)))
}
