//! Handlers for the `/grades` resource.
//!
//! Grades are a small reference table: lists are returned whole, ordered by
//! `sort_order`, and deletes are hard deletes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::grade::{CreateGrade, Grade, UpdateGrade};
use gunpla_db::repositories::GradeRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/grades (public badge list)
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Grade>>>> {
    let pattern = params.pattern();
    let grades = GradeRepo::list(&state.pool, pattern.as_deref()).await?;
    Ok(Json(DataResponse { data: grades }))
}

/// GET /api/v1/admin/grades
pub async fn admin_list(
    state: State<AppState>,
    RequireEditor(_user): RequireEditor,
    params: Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Grade>>>> {
    list(state, params).await
}

/// POST /api/v1/admin/grades
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateGrade>,
) -> AppResult<(StatusCode, Json<DataResponse<Grade>>)> {
    validate_input(&input)?;
    let grade = GradeRepo::create(&state.pool, &input).await?;
    tracing::info!(grade_id = grade.id, code = %grade.code, user_id = user.user_id, "Grade created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: grade })))
}

/// GET /api/v1/admin/grades/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Grade>>> {
    let grade = GradeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Grade", id }))?;
    Ok(Json(DataResponse { data: grade }))
}

/// PUT /api/v1/admin/grades/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGrade>,
) -> AppResult<Json<DataResponse<Grade>>> {
    validate_input(&input)?;
    let grade = GradeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Grade", id }))?;
    tracing::info!(grade_id = id, user_id = user.user_id, "Grade updated");
    Ok(Json(DataResponse { data: grade }))
}

/// DELETE /api/v1/admin/grades/{id}
///
/// Fails with 409 while kits still reference the grade.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if GradeRepo::delete(&state.pool, id).await? {
        tracing::info!(grade_id = id, user_id = user.user_id, "Grade deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Grade", id }))
    }
}
