//! Handlers for kits: public listing and detail, plus admin CRUD.
//!
//! The detail view stitches a kit together with its grade, series, brand,
//! mobile suit, the suit's pilots and organizations, their factions, and a
//! handful of related kits.

use std::future::Future;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gunpla_core::catalog::{KitSort, RELATED_KITS_LIMIT};
use gunpla_core::error::CoreError;
use gunpla_core::types::DbId;
use gunpla_db::models::kit::{CreateKit, Kit, KitDetail, KitListItem, UpdateKit};
use gunpla_db::repositories::{
    BrandRepo, GradeRepo, KitRepo, MobileSuitOrganizationRepo, MobileSuitPilotRepo,
    MobileSuitRepo, OrganizationFactionRepo, SeriesRepo,
};
use gunpla_db::DbPool;

use crate::error::{validate_input, AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::KitListParams;
use crate::response::{DataResponse, PaginatedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/kits
///
/// Search, badge filters, sort, and pagination over active kits.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<KitListParams>,
) -> AppResult<Json<PaginatedResponse<KitListItem>>> {
    list_kits(&state.pool, &params, false).await.map(Json)
}

/// GET /api/v1/kits/{id}
pub async fn get_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<KitDetail>>> {
    let kit = find_active(&state.pool, id).await?;
    let detail = assemble_detail(&state.pool, kit).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/kits/{id}/related
pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<KitListItem>>>> {
    let kit = find_active(&state.pool, id).await?;
    let kits = KitRepo::related(&state.pool, &kit, RELATED_KITS_LIMIT).await?;
    Ok(Json(DataResponse { data: kits }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/kits
pub async fn admin_list(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Query(params): Query<KitListParams>,
) -> AppResult<Json<PaginatedResponse<KitListItem>>> {
    list_kits(&state.pool, &params, true).await.map(Json)
}

/// POST /api/v1/admin/kits
pub async fn create(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Json(input): Json<CreateKit>,
) -> AppResult<(StatusCode, Json<DataResponse<Kit>>)> {
    validate_input(&input)?;
    let kit = KitRepo::create(&state.pool, &input).await?;
    tracing::info!(kit_id = kit.id, user_id = user.user_id, "Kit created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: kit })))
}

/// GET /api/v1/admin/kits/{id}
///
/// Returns the kit whether or not it is active.
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Kit>>> {
    let kit = KitRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Kit", id }))?;
    Ok(Json(DataResponse { data: kit }))
}

/// PUT /api/v1/admin/kits/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateKit>,
) -> AppResult<Json<DataResponse<Kit>>> {
    validate_input(&input)?;
    let kit = KitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Kit", id }))?;
    tracing::info!(kit_id = id, user_id = user.user_id, "Kit updated");
    Ok(Json(DataResponse { data: kit }))
}

/// DELETE /api/v1/admin/kits/{id}
///
/// Deactivates the kit. Deleting an already inactive kit is a no-op.
pub async fn delete(
    State(state): State<AppState>,
    RequireEditor(user): RequireEditor,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !KitRepo::deactivate(&state.pool, id).await? {
        KitRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Kit", id }))?;
    }
    tracing::info!(kit_id = id, user_id = user.user_id, "Kit deactivated");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn list_kits(
    pool: &DbPool,
    params: &KitListParams,
    admin: bool,
) -> AppResult<PaginatedResponse<KitListItem>> {
    let sort = KitSort::parse_param(params.sort.as_deref())?;
    let filter = params.filter(admin);
    let page = params.page_request();

    let (items, total) = tokio::try_join!(
        KitRepo::search(pool, &filter, sort, page),
        KitRepo::count(pool, &filter),
    )?;

    Ok(PaginatedResponse::new(items, page, total))
}

/// Load a kit for the public pages; inactive kits are reported as missing.
async fn find_active(pool: &DbPool, id: DbId) -> AppResult<Kit> {
    KitRepo::find_by_id(pool, id)
        .await?
        .filter(|kit| kit.is_active)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Kit", id }))
}

/// Run `fetch` only when the optional foreign key is set.
async fn fetch_optional<T, F, Fut>(id: Option<DbId>, fetch: F) -> Result<Option<T>, sqlx::Error>
where
    F: FnOnce(DbId) -> Fut,
    Fut: Future<Output = Result<Option<T>, sqlx::Error>>,
{
    match id {
        Some(id) => fetch(id).await,
        None => Ok(None),
    }
}

/// Build the full [`KitDetail`] for an active kit.
///
/// The grade, series, brand, and mobile suit lookups are independent and run
/// concurrently. Pilots, organizations, and related kits follow once the
/// mobile suit is known, and factions come last since they hang off the
/// organizations. Dangling or inactive references come back as `None` or
/// empty lists; database failures propagate.
pub async fn assemble_detail(pool: &DbPool, kit: Kit) -> AppResult<KitDetail> {
    let (grade, series, brand, mobile_suit) = tokio::try_join!(
        GradeRepo::find_by_id(pool, kit.grade_id),
        fetch_optional(kit.series_id, |id| SeriesRepo::find_by_id(pool, id)),
        fetch_optional(kit.brand_id, |id| BrandRepo::find_by_id(pool, id)),
        fetch_optional(kit.mobile_suit_id, |id| MobileSuitRepo::find_by_id(pool, id)),
    )?;
    let mobile_suit = mobile_suit.filter(|ms| ms.is_active);

    let (pilots, organizations, related_kits) = match &mobile_suit {
        Some(ms) => tokio::try_join!(
            MobileSuitPilotRepo::pilots_for_mobile_suit(pool, ms.id, true),
            MobileSuitOrganizationRepo::organizations_for_mobile_suit(pool, ms.id, true),
            KitRepo::related(pool, &kit, RELATED_KITS_LIMIT),
        )?,
        None => (
            Vec::new(),
            Vec::new(),
            KitRepo::related(pool, &kit, RELATED_KITS_LIMIT).await?,
        ),
    };

    let organization_ids: Vec<DbId> = organizations.iter().map(|o| o.id).collect();
    let factions = OrganizationFactionRepo::factions_for_organizations(pool, &organization_ids)
        .await?;

    Ok(KitDetail {
        kit,
        grade,
        series,
        brand,
        mobile_suit,
        pilots,
        organizations,
        factions,
        related_kits,
    })
}
