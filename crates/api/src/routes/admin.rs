//! Admin console routes, mounted at `/admin`.
//!
//! Every handler behind these routes requires the `editor` or `admin` role;
//! `/users` requires `admin`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use gunpla_core::uploads::MAX_UPLOAD_BYTES;

use crate::handlers::{
    brand, company, faction, grade, kit, lookup, mobile_suit, organization, pilot, relations,
    series, uploads, users,
};
use crate::state::AppState;

/// Slack on top of the file size for multipart boundaries and the folder field.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /grades                                  -> grade::admin_list
/// POST   /grades                                  -> grade::create
/// GET    /grades/{id}                             -> grade::get_by_id
/// PUT    /grades/{id}                             -> grade::update
/// DELETE /grades/{id}                             -> grade::delete (hard)
///   (same five routes for /series, /brands)
///
/// GET    /companies                               -> company::admin_list
/// POST   /companies                               -> company::create
/// GET    /companies/{id}                          -> company::get_by_id
/// PUT    /companies/{id}                          -> company::update
/// DELETE /companies/{id}                          -> company::delete (deactivate)
///   (same five routes for /factions, /organizations, /mobile-suits,
///    /pilots, /kits)
///
/// GET    /mobile-suits/{id}/pilots                -> relations::list_pilots
/// POST   /mobile-suits/{id}/pilots                -> relations::link_pilot
/// DELETE /mobile-suits/{id}/pilots/{pilot_id}     -> relations::unlink_pilot
/// GET    /mobile-suits/{id}/organizations         -> relations::list_organizations
/// POST   /mobile-suits/{id}/organizations         -> relations::link_organization
/// DELETE /mobile-suits/{id}/organizations/{organization_id}
///                                                 -> relations::unlink_organization
/// GET    /organizations/{id}/factions             -> relations::list_factions
/// POST   /organizations/{id}/factions             -> relations::link_faction
/// DELETE /organizations/{id}/factions/{faction_id}
///                                                 -> relations::unlink_faction
///
/// GET    /lookup/{entity}                         -> lookup::suggest
/// POST   /uploads                                 -> uploads::upload_image (multipart)
///
/// GET    /users                                   -> users::list_users
/// POST   /users                                   -> users::create_user
/// DELETE /users/{id}                              -> users::deactivate_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        // Reference tables
        .route("/grades", get(grade::admin_list).post(grade::create))
        .route(
            "/grades/{id}",
            get(grade::get_by_id).put(grade::update).delete(grade::delete),
        )
        .route("/series", get(series::admin_list).post(series::create))
        .route(
            "/series/{id}",
            get(series::get_by_id)
                .put(series::update)
                .delete(series::delete),
        )
        .route("/brands", get(brand::admin_list).post(brand::create))
        .route(
            "/brands/{id}",
            get(brand::get_by_id).put(brand::update).delete(brand::delete),
        )
        // Soft-deletable entities
        .route("/companies", get(company::admin_list).post(company::create))
        .route(
            "/companies/{id}",
            get(company::get_by_id)
                .put(company::update)
                .delete(company::delete),
        )
        .route("/factions", get(faction::admin_list).post(faction::create))
        .route(
            "/factions/{id}",
            get(faction::get_by_id)
                .put(faction::update)
                .delete(faction::delete),
        )
        .route(
            "/organizations",
            get(organization::admin_list).post(organization::create),
        )
        .route(
            "/organizations/{id}",
            get(organization::get_by_id)
                .put(organization::update)
                .delete(organization::delete),
        )
        .route(
            "/mobile-suits",
            get(mobile_suit::admin_list).post(mobile_suit::create),
        )
        .route(
            "/mobile-suits/{id}",
            get(mobile_suit::get_by_id)
                .put(mobile_suit::update)
                .delete(mobile_suit::delete),
        )
        .route("/pilots", get(pilot::admin_list).post(pilot::create))
        .route(
            "/pilots/{id}",
            get(pilot::get_by_id)
                .put(pilot::update)
                .delete(pilot::delete),
        )
        .route("/kits", get(kit::admin_list).post(kit::create))
        .route(
            "/kits/{id}",
            get(kit::get_by_id).put(kit::update).delete(kit::delete),
        )
        // Relations
        .route(
            "/mobile-suits/{id}/pilots",
            get(relations::list_pilots).post(relations::link_pilot),
        )
        .route(
            "/mobile-suits/{id}/pilots/{pilot_id}",
            delete(relations::unlink_pilot),
        )
        .route(
            "/mobile-suits/{id}/organizations",
            get(relations::list_organizations).post(relations::link_organization),
        )
        .route(
            "/mobile-suits/{id}/organizations/{organization_id}",
            delete(relations::unlink_organization),
        )
        .route(
            "/organizations/{id}/factions",
            get(relations::list_factions).post(relations::link_faction),
        )
        .route(
            "/organizations/{id}/factions/{faction_id}",
            delete(relations::unlink_faction),
        )
        // Console helpers
        .route("/lookup/{entity}", get(lookup::suggest))
        .route(
            "/uploads",
            post(uploads::upload_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", delete(users::deactivate_user))
}
