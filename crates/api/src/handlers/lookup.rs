//! Autocomplete endpoint backing the admin console's reference pickers.

use axum::extract::{Path, Query, State};
use axum::Json;
use gunpla_core::catalog::LookupEntity;
use gunpla_core::search::{clamp_limit, normalize_query, DEFAULT_LOOKUP_LIMIT, MAX_LOOKUP_LIMIT};
use gunpla_db::models::lookup::LookupItem;
use gunpla_db::repositories::LookupRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireEditor;
use crate::query::LookupParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/lookup/{entity}?q=&limit=
///
/// `entity` is a route slug such as `mobile-suits`; unknown slugs are a 400.
/// Inactive rows are never suggested.
pub async fn suggest(
    State(state): State<AppState>,
    RequireEditor(_user): RequireEditor,
    Path(entity): Path<String>,
    Query(params): Query<LookupParams>,
) -> AppResult<Json<DataResponse<Vec<LookupItem>>>> {
    let entity: LookupEntity = entity.parse()?;
    let query = normalize_query(params.q.as_deref());
    let limit = clamp_limit(params.limit, DEFAULT_LOOKUP_LIMIT, MAX_LOOKUP_LIMIT);

    let items = LookupRepo::suggest(&state.pool, entity, query.as_deref(), limit).await?;
    Ok(Json(DataResponse { data: items }))
}
