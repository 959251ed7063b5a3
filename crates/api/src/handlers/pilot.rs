//! Handlers for the `/pilots` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::common::ListFilter;
use gunpla_db::models::mobile_suit::MobileSuit;
use gunpla_db::models::pilot::{CreatePilot, Pilot, UpdatePilot};
use gunpla_db::models::series::Series;
use gunpla_db::repositories::{MobileSuitPilotRepo, PilotRepo, SeriesRepo};
use serde::Serialize;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::ListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PilotDetail {
    pub pilot: Pilot,
    pub series: Option<Series>,
    pub mobile_suits: Vec<MobileSuit>,
}

/// GET /api/v1/pilots
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Pilot>>> {
    list_page(&state, &params.public_filter(), &params).await
}

/// GET /api/v1/pilots/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PilotDetail>>> {
    let pool = &state.pool;
    let pilot = PilotRepo::find_by_id(pool, id)
        .await?
        .filter(|p| p.is_active)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pilot", id }))?;

    let series_lookup = async {
        match pilot.series_id {
            Some(series_id) => SeriesRepo::find_by_id(pool, series_id).await,
            None => Ok(None),
        }
    };
    let (series, mobile_suits) = tokio::try_join!(
        series_lookup,
        MobileSuitPilotRepo::mobile_suits_for_pilot(pool, id, true),
    )?;

    Ok(Json(DataResponse {
        data: PilotDetail {
            pilot,
            series,
            mobile_suits,
        },
    }))
}

/// GET /api/v1/admin/pilots
pub async fn admin_list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Pilot>>> {
    list_page(&state, &params.admin_filter(), &params).await
}

/// POST /api/v1/admin/pilots
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreatePilot>,
) -> AppResult<(StatusCode, Json<DataResponse<Pilot>>)> {
    validate_input(&input)?;
    let pilot = PilotRepo::create(&state.pool, &input).await?;
    tracing::info!(pilot_id = pilot.id, user_id = user.user_id, "Pilot created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: pilot })))
}

/// GET /api/v1/admin/pilots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Pilot>>> {
    let pilot = PilotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pilot", id }))?;
    Ok(Json(DataResponse { data: pilot }))
}

/// PUT /api/v1/admin/pilots/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePilot>,
) -> AppResult<Json<DataResponse<Pilot>>> {
    validate_input(&input)?;
    let pilot = PilotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Pilot", id }))?;
    tracing::info!(pilot_id = id, user_id = user.user_id, "Pilot updated");
    Ok(Json(DataResponse { data: pilot }))
}

/// DELETE /api/v1/admin/pilots/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !PilotRepo::deactivate(&state.pool, id).await? {
        PilotRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Pilot", id }))?;
    }
    tracing::info!(pilot_id = id, user_id = user.user_id, "Pilot deactivated");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_page(
    state: &AppState,
    filter: &ListFilter,
    params: &ListParams,
) -> AppResult<Json<PaginatedResponse<Pilot>>> {
    let page = params.page_request();
    let (items, total) = tokio::try_join!(
        PilotRepo::list(&state.pool, filter, page),
        PilotRepo::count(&state.pool, filter),
    )?;
    Ok(Json(PaginatedResponse::new(items, page, total)))
}
