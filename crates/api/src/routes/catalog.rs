//! Public browse routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    brand, catalog, company, faction, grade, kit, mobile_suit, organization, pilot, series,
};
use crate::state::AppState;

/// Public catalog routes, merged at the `/api/v1` root.
///
/// ```text
/// GET /catalog/summary        -> catalog::summary
///
/// GET /kits                   -> kit::list
/// GET /kits/{id}              -> kit::get_detail
/// GET /kits/{id}/related      -> kit::related
///
/// GET /mobile-suits           -> mobile_suit::list
/// GET /mobile-suits/{id}      -> mobile_suit::get_detail
/// GET /pilots                 -> pilot::list
/// GET /pilots/{id}            -> pilot::get_detail
/// GET /factions               -> faction::list
/// GET /factions/{id}          -> faction::get_detail
/// GET /organizations          -> organization::list
/// GET /organizations/{id}     -> organization::get_detail
///
/// GET /grades                 -> grade::list
/// GET /series                 -> series::list
/// GET /brands                 -> brand::list
/// GET /companies              -> company::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog/summary", get(catalog::summary))
        .route("/kits", get(kit::list))
        .route("/kits/{id}", get(kit::get_detail))
        .route("/kits/{id}/related", get(kit::related))
        .route("/mobile-suits", get(mobile_suit::list))
        .route("/mobile-suits/{id}", get(mobile_suit::get_detail))
        .route("/pilots", get(pilot::list))
        .route("/pilots/{id}", get(pilot::get_detail))
        .route("/factions", get(faction::list))
        .route("/factions/{id}", get(faction::get_detail))
        .route("/organizations", get(organization::list))
        .route("/organizations/{id}", get(organization::get_detail))
        .route("/grades", get(grade::list))
        .route("/series", get(series::list))
        .route("/brands", get(brand::list))
        .route("/companies", get(company::list))
}
