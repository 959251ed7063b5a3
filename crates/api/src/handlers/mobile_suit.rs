//! Handlers for the `/mobile-suits` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::common::ListFilter;
use gunpla_db::models::company::Company;
use gunpla_db::models::kit::KitListItem;
use gunpla_db::models::mobile_suit::{CreateMobileSuit, MobileSuit, UpdateMobileSuit};
use gunpla_db::models::organization::Organization;
use gunpla_db::models::pilot::Pilot;
use gunpla_db::models::series::Series;
use gunpla_db::repositories::{
    CompanyRepo, KitRepo, MobileSuitOrganizationRepo, MobileSuitPilotRepo, MobileSuitRepo,
    SeriesRepo,
};
use serde::Serialize;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::ListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// Public mobile suit page: the suit, its manufacturer and series, who flies
/// it, who fields it, and every kit of it.
#[derive(Debug, Serialize)]
pub struct MobileSuitDetail {
    pub mobile_suit: MobileSuit,
    pub series: Option<Series>,
    pub company: Option<Company>,
    pub pilots: Vec<Pilot>,
    pub organizations: Vec<Organization>,
    pub kits: Vec<KitListItem>,
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/mobile-suits
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<MobileSuit>>> {
    list_page(&state, &params.public_filter(), &params).await
}

/// GET /api/v1/mobile-suits/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MobileSuitDetail>>> {
    let pool = &state.pool;
    let mobile_suit = MobileSuitRepo::find_by_id(pool, id)
        .await?
        .filter(|ms| ms.is_active)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MobileSuit",
            id,
        }))?;

    let series_lookup = async {
        match mobile_suit.series_id {
            Some(series_id) => SeriesRepo::find_by_id(pool, series_id).await,
            None => Ok(None),
        }
    };
    let company_lookup = async {
        match mobile_suit.company_id {
            Some(company_id) => CompanyRepo::find_by_id(pool, company_id).await,
            None => Ok(None),
        }
    };

    let (series, company, pilots, organizations, kits) = tokio::try_join!(
        series_lookup,
        company_lookup,
        MobileSuitPilotRepo::pilots_for_mobile_suit(pool, id, true),
        MobileSuitOrganizationRepo::organizations_for_mobile_suit(pool, id, true),
        KitRepo::list_by_mobile_suit(pool, id),
    )?;

    Ok(Json(DataResponse {
        data: MobileSuitDetail {
            mobile_suit,
            series,
            company: company.filter(|c| c.is_active),
            pilots,
            organizations,
            kits,
        },
    }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/mobile-suits
pub async fn admin_list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<MobileSuit>>> {
    list_page(&state, &params.admin_filter(), &params).await
}

/// POST /api/v1/admin/mobile-suits
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateMobileSuit>,
) -> AppResult<(StatusCode, Json<DataResponse<MobileSuit>>)> {
    validate_input(&input)?;
    let mobile_suit = MobileSuitRepo::create(&state.pool, &input).await?;
    tracing::info!(
        mobile_suit_id = mobile_suit.id,
        model_number = %mobile_suit.model_number,
        user_id = user.user_id,
        "Mobile suit created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: mobile_suit })))
}

/// GET /api/v1/admin/mobile-suits/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MobileSuit>>> {
    let mobile_suit = MobileSuitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MobileSuit",
            id,
        }))?;
    Ok(Json(DataResponse { data: mobile_suit }))
}

/// PUT /api/v1/admin/mobile-suits/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMobileSuit>,
) -> AppResult<Json<DataResponse<MobileSuit>>> {
    validate_input(&input)?;
    let mobile_suit = MobileSuitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MobileSuit",
            id,
        }))?;
    tracing::info!(mobile_suit_id = id, user_id = user.user_id, "Mobile suit updated");
    Ok(Json(DataResponse { data: mobile_suit }))
}

/// DELETE /api/v1/admin/mobile-suits/{id}
///
/// Deactivates the suit. Its kits stay listed but no longer show the suit in
/// their detail view.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !MobileSuitRepo::deactivate(&state.pool, id).await? {
        MobileSuitRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "MobileSuit",
                id,
            }))?;
    }
    tracing::info!(mobile_suit_id = id, user_id = user.user_id, "Mobile suit deactivated");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_page(
    state: &AppState,
    filter: &ListFilter,
    params: &ListParams,
) -> AppResult<Json<PaginatedResponse<MobileSuit>>> {
    let page = params.page_request();
    let (items, total) = tokio::try_join!(
        MobileSuitRepo::list(&state.pool, filter, page),
        MobileSuitRepo::count(&state.pool, filter),
    )?;
    Ok(Json(PaginatedResponse::new(items, page, total)))
}
