pub mod admin;
pub mod auth;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /catalog/summary                                 counts + latest kits
/// /kits                                            search, filter, sort, page
/// /kits/{id}                                       kit detail
/// /kits/{id}/related                               related kits
/// /mobile-suits, /pilots, /factions, /organizations
///                                                  list + detail (active only)
/// /grades, /series, /brands, /companies            filter badge lists
///
/// /admin/{grades,series,brands}                    CRUD (hard delete)
/// /admin/{companies,factions,organizations,
///         mobile-suits,pilots,kits}                CRUD (delete deactivates)
/// /admin/mobile-suits/{id}/pilots                  list, link, unlink
/// /admin/mobile-suits/{id}/organizations           list, link, unlink
/// /admin/organizations/{id}/factions               list, link, unlink
/// /admin/lookup/{entity}                           autocomplete
/// /admin/uploads                                   image upload (multipart)
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                deactivate (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .merge(catalog::router())
}
