//! Handlers for the `/brands` resource (hard delete).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::brand::{Brand, CreateBrand, UpdateBrand};
use gunpla_db::repositories::BrandRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/brands
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Brand>>>> {
    let pattern = params.pattern();
    let brands = BrandRepo::list(&state.pool, pattern.as_deref()).await?;
    Ok(Json(DataResponse { data: brands }))
}

/// GET /api/v1/admin/brands
pub async fn admin_list(
    state: State<AppState>,
    RequireEditor(_user): RequireEditor,
    params: Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Brand>>>> {
    list(state, params).await
}

/// POST /api/v1/admin/brands
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateBrand>,
) -> AppResult<(StatusCode, Json<DataResponse<Brand>>)> {
    validate_input(&input)?;
    let brand = BrandRepo::create(&state.pool, &input).await?;
    tracing::info!(brand_id = brand.id, user_id = user.user_id, "Brand created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: brand })))
}

/// GET /api/v1/admin/brands/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Brand>>> {
    let brand = BrandRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Brand", id }))?;
    Ok(Json(DataResponse { data: brand }))
}

/// PUT /api/v1/admin/brands/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBrand>,
) -> AppResult<Json<DataResponse<Brand>>> {
    validate_input(&input)?;
    let brand = BrandRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Brand", id }))?;
    tracing::info!(brand_id = id, user_id = user.user_id, "Brand updated");
    Ok(Json(DataResponse { data: brand }))
}

/// DELETE /api/v1/admin/brands/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BrandRepo::delete(&state.pool, id).await? {
        tracing::info!(brand_id = id, user_id = user.user_id, "Brand deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Brand", id }))
    }
}
