//! HTTP-level tests for the link tables managed from the console:
//! mobile suit pilots, mobile suit organizations, and organization factions.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, editor_token, get, get_auth, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

/// Create an entity through the console and return its id.
async fn create(pool: &PgPool, token: &str, uri: &str, body: serde_json::Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, uri, body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_pilot_returns_201_then_200(pool: PgPool) {
    let token = editor_token(&pool).await;
    let suit = create(
        &pool,
        &token,
        "/api/v1/admin/mobile-suits",
        json!({"name": "Gundam", "model_number": "RX-78-2"}),
    )
    .await;
    let pilot = create(&pool, &token, "/api/v1/admin/pilots", json!({"name": "Amuro Ray"})).await;
    let uri = format!("/api/v1/admin/mobile-suits/{suit}/pilots");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, json!({"pilot_id": pilot}), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "Amuro Ray");

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(app, &uri, json!({"pilot_id": pilot}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 1);

    // The public pilot page lists the suit.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/pilots/{pilot}")).await).await;
    assert_eq!(json["data"]["mobile_suits"][0]["model_number"], "RX-78-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_link_to_missing_pilot_returns_404(pool: PgPool) {
    let token = editor_token(&pool).await;
    let suit = create(
        &pool,
        &token,
        "/api/v1/admin/mobile-suits",
        json!({"name": "Zaku II", "model_number": "MS-06"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/mobile-suits/{suit}/pilots"),
        json!({"pilot_id": 999999}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Pilot"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unlink_pilot(pool: PgPool) {
    let token = editor_token(&pool).await;
    let suit = create(
        &pool,
        &token,
        "/api/v1/admin/mobile-suits",
        json!({"name": "Gelgoog", "model_number": "MS-14"}),
    )
    .await;
    let pilot = create(&pool, &token, "/api/v1/admin/pilots", json!({"name": "Char"})).await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/v1/admin/mobile-suits/{suit}/pilots"),
        json!({"pilot_id": pilot}),
        &token,
    )
    .await;

    let uri = format!("/api/v1/admin/mobile-suits/{suit}/pilots/{pilot}");
    let app = common::build_test_app(pool.clone());
    assert_eq!(delete_auth(app, &uri, &token).await.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    assert_eq!(delete_auth(app, &uri, &token).await.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(
        get_auth(app, &format!("/api/v1/admin/mobile-suits/{suit}/pilots"), &token).await,
    )
    .await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_console_relation_list_includes_inactive_rows(pool: PgPool) {
    let token = editor_token(&pool).await;
    let suit = create(
        &pool,
        &token,
        "/api/v1/admin/mobile-suits",
        json!({"name": "Rick Dom", "model_number": "MS-09R"}),
    )
    .await;
    let org = create(
        &pool,
        &token,
        "/api/v1/admin/organizations",
        json!({"name": "Black Tri-Stars"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    post_json_auth(
        app,
        &format!("/api/v1/admin/mobile-suits/{suit}/organizations"),
        json!({"organization_id": org}),
        &token,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    delete_auth(app, &format!("/api/v1/admin/organizations/{org}"), &token).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get_auth(
            app,
            &format!("/api/v1/admin/mobile-suits/{suit}/organizations"),
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(json["data"][0]["is_active"], false);

    // The public page hides it.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/mobile-suits/{suit}")).await).await;
    assert!(json["data"]["organizations"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_faction_links_show_on_both_detail_pages(pool: PgPool) {
    let token = editor_token(&pool).await;
    let org = create(
        &pool,
        &token,
        "/api/v1/admin/organizations",
        json!({"name": "Titans"}),
    )
    .await;
    let faction = create(
        &pool,
        &token,
        "/api/v1/admin/factions",
        json!({"name": "Earth Federation"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &format!("/api/v1/admin/organizations/{org}/factions"),
        json!({"faction_id": faction}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/factions/{faction}")).await).await;
    assert_eq!(json["data"]["organizations"][0]["name"], "Titans");

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/organizations/{org}")).await).await;
    assert_eq!(json["data"]["factions"][0]["name"], "Earth Federation");

    let app = common::build_test_app(pool);
    let response = delete_auth(
        app,
        &format!("/api/v1/admin/organizations/{org}/factions/{faction}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_relation_routes_require_editor(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/admin/mobile-suits/1/pilots").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
