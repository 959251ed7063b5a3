//! Handler for the home-page catalog summary.

use axum::extract::State;
use axum::Json;
use gunpla_core::catalog::LATEST_KITS_LIMIT;
use gunpla_db::models::catalog::CatalogSummary;
use gunpla_db::repositories::{CatalogRepo, KitRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/catalog/summary
///
/// Active entity counts plus the most recently added kits.
pub async fn summary(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<CatalogSummary>>> {
    let (counts, latest_kits) = tokio::try_join!(
        CatalogRepo::counts(&state.pool),
        KitRepo::latest(&state.pool, LATEST_KITS_LIMIT),
    )?;

    Ok(Json(DataResponse {
        data: CatalogSummary {
            counts,
            latest_kits,
        },
    }))
}
