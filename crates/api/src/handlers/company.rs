//! Handlers for the `/companies` resource (in-universe manufacturers).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::company::{Company, CreateCompany, UpdateCompany};
use gunpla_db::models::common::ListFilter;
use gunpla_db::repositories::CompanyRepo;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::ListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

/// GET /api/v1/companies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Company>>> {
    list_page(&state, &params.public_filter(), &params).await
}

/// GET /api/v1/admin/companies
pub async fn admin_list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PaginatedResponse<Company>>> {
    list_page(&state, &params.admin_filter(), &params).await
}

async fn list_page(
    state: &AppState,
    filter: &ListFilter,
    params: &ListParams,
) -> AppResult<Json<PaginatedResponse<Company>>> {
    let page = params.page_request();
    let (items, total) = tokio::try_join!(
        CompanyRepo::list(&state.pool, filter, page),
        CompanyRepo::count(&state.pool, filter),
    )?;
    Ok(Json(PaginatedResponse::new(items, page, total)))
}

/// POST /api/v1/admin/companies
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<DataResponse<Company>>)> {
    validate_input(&input)?;
    let company = CompanyRepo::create(&state.pool, &input).await?;
    tracing::info!(company_id = company.id, user_id = user.user_id, "Company created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: company })))
}

/// GET /api/v1/admin/companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Company>>> {
    let company = CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))?;
    Ok(Json(DataResponse { data: company }))
}

/// PUT /api/v1/admin/companies/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<DataResponse<Company>>> {
    validate_input(&input)?;
    let company = CompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))?;
    tracing::info!(company_id = id, user_id = user.user_id, "Company updated");
    Ok(Json(DataResponse { data: company }))
}

/// DELETE /api/v1/admin/companies/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !CompanyRepo::deactivate(&state.pool, id).await? {
        CompanyRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Company",
                id,
            }))?;
    }
    tracing::info!(company_id = id, user_id = user.user_id, "Company deactivated");
    Ok(StatusCode::NO_CONTENT)
}
