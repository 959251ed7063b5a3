//! Handlers for the `/organizations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::common::ListFilter;
use gunpla_db::models::faction::Faction;
use gunpla_db::models::mobile_suit::MobileSuit;
use gunpla_db::models::organization::{CreateOrganization, Organization, UpdateOrganization};
use gunpla_db::models::series::Series;
use gunpla_db::repositories::{
    MobileSuitOrganizationRepo, OrganizationFactionRepo, OrganizationRepo, SeriesRepo,
};
use serde::Serialize;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::ListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Public organization page.
#[derive(Debug, Serialize)]
pub struct OrganizationDetail {
    pub organization: Organization,
    pub series: Option<Series>,
    pub factions: Vec<Faction>,
    pub mobile_suits: Vec<MobileSuit>,
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/organizations
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Organization>>> {
    list_page(&state, &params.public_filter(), &params).await
}

/// GET /api/v1/organizations/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OrganizationDetail>>> {
    let pool = &state.pool;
    let organization = OrganizationRepo::find_by_id(pool, id)
        .await?
        .filter(|o| o.is_active)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;

    let series_lookup = async {
        match organization.series_id {
            Some(series_id) => SeriesRepo::find_by_id(pool, series_id).await,
            None => Ok(None),
        }
    };
    let (series, factions, mobile_suits) = tokio::try_join!(
        series_lookup,
        OrganizationFactionRepo::factions_for_organization(pool, id, true),
        MobileSuitOrganizationRepo::mobile_suits_for_organization(pool, id, true),
    )?;

    Ok(Json(DataResponse {
        data: OrganizationDetail {
            organization,
            series,
            factions,
            mobile_suits,
        },
    }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/organizations
pub async fn admin_list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Organization>>> {
    list_page(&state, &params.admin_filter(), &params).await
}

/// POST /api/v1/admin/organizations
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateOrganization>,
) -> AppResult<(StatusCode, Json<DataResponse<Organization>>)> {
    validate_input(&input)?;
    let organization = OrganizationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        organization_id = organization.id,
        user_id = user.user_id,
        "Organization created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: organization })))
}

/// GET /api/v1/admin/organizations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Organization>>> {
    let organization = OrganizationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;
    Ok(Json(DataResponse { data: organization }))
}

/// PUT /api/v1/admin/organizations/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrganization>,
) -> AppResult<Json<DataResponse<Organization>>> {
    validate_input(&input)?;
    let organization = OrganizationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;
    tracing::info!(organization_id = id, user_id = user.user_id, "Organization updated");
    Ok(Json(DataResponse { data: organization }))
}

/// DELETE /api/v1/admin/organizations/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !OrganizationRepo::deactivate(&state.pool, id).await? {
        OrganizationRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Organization",
                id,
            }))?;
    }
    tracing::info!(organization_id = id, user_id = user.user_id, "Organization deactivated");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_page(
    state: &AppState,
    filter: &ListFilter,
    params: &ListParams,
) -> AppResult<Json<PaginatedResponse<Organization>>> {
    let page = params.page_request();
    let (items, total) = tokio::try_join!(
        OrganizationRepo::list(&state.pool, filter, page),
        OrganizationRepo::count(&state.pool, filter),
    )?;
    Ok(Json(PaginatedResponse::new(items, page, total)))
}
