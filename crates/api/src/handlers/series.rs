//! Handlers for the `/series` resource (hard delete).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::series::{CreateSeries, Series, UpdateSeries};
use gunpla_db::repositories::SeriesRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/series
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    let pattern = params.pattern();
    let series = SeriesRepo::list(&state.pool, pattern.as_deref()).await?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /api/v1/admin/series
pub async fn admin_list(
    state: State<AppState>,
    RequireEditor(_user): RequireEditor,
    params: Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    list(state, params).await
}

/// POST /api/v1/admin/series
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateSeries>,
) -> AppResult<(StatusCode, Json<DataResponse<Series>>)> {
    validate_input(&input)?;
    let series = SeriesRepo::create(&state.pool, &input).await?;
    tracing::info!(series_id = series.id, user_id = user.user_id, "Series created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: series })))
}

/// GET /api/v1/admin/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Series>>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id,
        }))?;
    Ok(Json(DataResponse { data: series }))
}

/// PUT /api/v1/admin/series/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSeries>,
) -> AppResult<Json<DataResponse<Series>>> {
    validate_input(&input)?;
    let series = SeriesRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id,
        }))?;
    tracing::info!(series_id = id, user_id = user.user_id, "Series updated");
    Ok(Json(DataResponse { data: series }))
}

/// DELETE /api/v1/admin/series/{id}
///
/// Kits, mobile suits, pilots, and organizations of the series keep their
/// rows with `series_id` cleared.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SeriesRepo::delete(&state.pool, id).await? {
        tracing::info!(series_id = id, user_id = user.user_id, "Series deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id,
        }))
    }
}
