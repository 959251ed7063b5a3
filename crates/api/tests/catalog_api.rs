//! HTTP-level tests for the public catalog: kit search, filters, sorting,
//! detail assembly, and the universe browse endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, grade_id};
use gunpla_db::models::kit::{CreateKit, Kit};
use gunpla_db::models::mobile_suit::{CreateMobileSuit, MobileSuit};
use gunpla_db::models::organization::CreateOrganization;
use gunpla_db::models::pilot::CreatePilot;
use gunpla_db::models::faction::CreateFaction;
use gunpla_db::models::series::{CreateSeries, Series};
use gunpla_db::repositories::{
    FactionRepo, KitRepo, MobileSuitOrganizationRepo, MobileSuitPilotRepo, MobileSuitRepo,
    OrganizationFactionRepo, OrganizationRepo, PilotRepo, SeriesRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

async fn seed_series(pool: &PgPool, name: &str) -> Series {
    SeriesRepo::create(
        pool,
        &CreateSeries {
            name: name.to_string(),
            timeline: Some("Universal Century".to_string()),
            start_year: Some(1979),
            description: None,
        },
    )
    .await
    .unwrap()
}

async fn seed_suit(pool: &PgPool, name: &str, model: &str, series_id: Option<i64>) -> MobileSuit {
    MobileSuitRepo::create(
        pool,
        &CreateMobileSuit {
            name: name.to_string(),
            model_number: model.to_string(),
            series_id,
            company_id: None,
            description: None,
            height_m: Some(18.0),
            weight_t: None,
            image_url: None,
        },
    )
    .await
    .unwrap()
}

async fn seed_kit(
    pool: &PgPool,
    name: &str,
    grade_id: i64,
    series_id: Option<i64>,
    mobile_suit_id: Option<i64>,
    price_yen: Option<i32>,
) -> Kit {
    KitRepo::create(
        pool,
        &CreateKit {
            name: name.to_string(),
            product_code: None,
            grade_id,
            series_id,
            brand_id: None,
            mobile_suit_id,
            scale: None,
            release_date: None,
            price_yen,
            description: None,
            image_url: None,
        },
    )
    .await
    .unwrap()
}

fn names(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Kit listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_list_is_paginated(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    for i in 0..5 {
        seed_kit(&pool, &format!("Kit {i}"), hg, None, None, None).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/kits?page=2&per_page=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["per_page"], 2);
    assert_eq!(json["pagination"]["total"], 5);
    assert_eq!(json["pagination"]["total_pages"], 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_search_matches_name_case_insensitively(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    seed_kit(&pool, "RX-78-2 Gundam", hg, None, None, None).await;
    seed_kit(&pool, "MS-06 Zaku II", hg, None, None, None).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/kits?search=zaku").await).await;
    assert_eq!(names(&json), vec!["MS-06 Zaku II"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_search_treats_wildcards_literally(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    seed_kit(&pool, "Gundam 100% Edition", hg, None, None, None).await;
    seed_kit(&pool, "Gundam 100 Edition", hg, None, None, None).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/kits?search=100%25").await).await;
    assert_eq!(names(&json), vec!["Gundam 100% Edition"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_filter_by_multiple_grades(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    let rg = grade_id(&pool, "RG").await;
    let mg = grade_id(&pool, "MG").await;
    seed_kit(&pool, "HG Kit", hg, None, None, None).await;
    seed_kit(&pool, "RG Kit", rg, None, None, None).await;
    seed_kit(&pool, "MG Kit", mg, None, None, None).await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get(app, &format!("/api/v1/kits?grade_ids={hg},{mg}&sort=name")).await,
    )
    .await;
    assert_eq!(names(&json), vec!["HG Kit", "MG Kit"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_sort_by_price(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    seed_kit(&pool, "Mid", hg, None, None, Some(2000)).await;
    seed_kit(&pool, "Cheap", hg, None, None, Some(800)).await;
    seed_kit(&pool, "Unpriced", hg, None, None, None).await;
    seed_kit(&pool, "Pricey", hg, None, None, Some(5000)).await;

    let app = common::build_test_app(pool.clone());
    let asc = body_json(get(app, "/api/v1/kits?sort=price_asc").await).await;
    assert_eq!(names(&asc), vec!["Cheap", "Mid", "Pricey", "Unpriced"]);

    let app = common::build_test_app(pool);
    let desc = body_json(get(app, "/api/v1/kits?sort=price_desc").await).await;
    assert_eq!(names(&desc), vec!["Pricey", "Mid", "Cheap", "Unpriced"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_unknown_sort_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/kits?sort=popularity").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_public_list_hides_inactive_kits(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    seed_kit(&pool, "Visible", hg, None, None, None).await;
    let hidden = seed_kit(&pool, "Hidden", hg, None, None, None).await;
    KitRepo::deactivate(&pool, hidden.id).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/kits?include_inactive=true").await).await;
    assert_eq!(names(&json), vec!["Visible"]);
    assert_eq!(json["pagination"]["total"], 1);
}

// ---------------------------------------------------------------------------
// Kit detail
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_detail_assembles_universe(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    let series = seed_series(&pool, "Mobile Suit Gundam").await;
    let suit = seed_suit(&pool, "Gundam", "RX-78-2", Some(series.id)).await;
    let pilot = PilotRepo::create(
        &pool,
        &CreatePilot {
            name: "Amuro Ray".to_string(),
            series_id: Some(series.id),
            affiliation_note: None,
            bio: None,
            image_url: None,
        },
    )
    .await
    .unwrap();
    let org = OrganizationRepo::create(
        &pool,
        &CreateOrganization {
            name: "White Base Crew".to_string(),
            description: None,
            series_id: Some(series.id),
        },
    )
    .await
    .unwrap();
    let faction = FactionRepo::create(
        &pool,
        &CreateFaction {
            name: "Earth Federation".to_string(),
            description: None,
            emblem_url: None,
        },
    )
    .await
    .unwrap();
    MobileSuitPilotRepo::link(&pool, suit.id, pilot.id).await.unwrap();
    MobileSuitOrganizationRepo::link(&pool, suit.id, org.id).await.unwrap();
    OrganizationFactionRepo::link(&pool, org.id, faction.id).await.unwrap();

    let kit = seed_kit(&pool, "HG RX-78-2", hg, Some(series.id), Some(suit.id), None).await;
    seed_kit(&pool, "RG RX-78-2", hg, Some(series.id), Some(suit.id), None).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/kits/{}", kit.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["kit"]["name"], "HG RX-78-2");
    assert_eq!(data["grade"]["code"], "HG");
    assert_eq!(data["series"]["name"], "Mobile Suit Gundam");
    assert!(data["brand"].is_null());
    assert_eq!(data["mobile_suit"]["model_number"], "RX-78-2");
    assert_eq!(data["pilots"][0]["name"], "Amuro Ray");
    assert_eq!(data["organizations"][0]["name"], "White Base Crew");
    assert_eq!(data["factions"][0]["name"], "Earth Federation");
    assert_eq!(data["related_kits"].as_array().unwrap().len(), 1);
    assert_eq!(data["related_kits"][0]["name"], "RG RX-78-2");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_kit_detail_hides_inactive_mobile_suit(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    let suit = seed_suit(&pool, "Zaku II", "MS-06", None).await;
    let kit = seed_kit(&pool, "HG Zaku II", hg, None, Some(suit.id), None).await;
    MobileSuitRepo::deactivate(&pool, suit.id).await.unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/kits/{}", kit.id)).await).await;
    assert!(json["data"]["mobile_suit"].is_null());
    assert!(json["data"]["pilots"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_kit_detail_returns_404(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    let kit = seed_kit(&pool, "Retired", hg, None, None, None).await;
    KitRepo::deactivate(&pool, kit.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/kits/{}", kit.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_related_kits_prefer_same_mobile_suit(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    let series = seed_series(&pool, "Zeta Gundam").await;
    let suit = seed_suit(&pool, "Zeta Gundam", "MSZ-006", Some(series.id)).await;
    let kit = seed_kit(&pool, "HG Zeta", hg, Some(series.id), Some(suit.id), None).await;
    seed_kit(&pool, "HG Hyaku Shiki", hg, Some(series.id), None, None).await;
    seed_kit(&pool, "MG Zeta", hg, None, Some(suit.id), None).await;
    seed_kit(&pool, "Unrelated", hg, None, None, None).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/kits/{}/related", kit.id)).await).await;
    assert_eq!(names(&json), vec!["MG Zeta", "HG Hyaku Shiki"]);
}

// ---------------------------------------------------------------------------
// Summary and universe browse
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_catalog_summary_counts_active_rows(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    seed_kit(&pool, "One", hg, None, None, None).await;
    let gone = seed_kit(&pool, "Two", hg, None, None, None).await;
    KitRepo::deactivate(&pool, gone.id).await.unwrap();
    seed_suit(&pool, "Gundam", "RX-78-2", None).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/catalog/summary").await).await;
    assert_eq!(json["data"]["counts"]["kits"], 1);
    assert_eq!(json["data"]["counts"]["mobile_suits"], 1);
    assert_eq!(json["data"]["counts"]["pilots"], 0);
    assert_eq!(names(&serde_json::json!({ "data": json["data"]["latest_kits"] })), vec!["One"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grades_are_listed_in_sort_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/grades").await).await;
    let codes: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["EG", "HG", "RG", "MG", "PG"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mobile_suit_detail_lists_its_kits(pool: PgPool) {
    let hg = grade_id(&pool, "HG").await;
    let suit = seed_suit(&pool, "Sazabi", "MSN-04", None).await;
    seed_kit(&pool, "RG Sazabi", hg, None, Some(suit.id), None).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/mobile-suits/{}", suit.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["mobile_suit"]["name"], "Sazabi");
    assert_eq!(json["data"]["kits"][0]["name"], "RG Sazabi");
    assert!(json["data"]["series"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mobile_suit_list_filters_by_series(pool: PgPool) {
    let series = seed_series(&pool, "Char's Counterattack").await;
    seed_suit(&pool, "Nu Gundam", "RX-93", Some(series.id)).await;
    seed_suit(&pool, "Gundam", "RX-78-2", None).await;

    let app = common::build_test_app(pool);
    let json = body_json(
        get(app, &format!("/api/v1/mobile-suits?series_id={}", series.id)).await,
    )
    .await;
    assert_eq!(names(&json), vec!["Nu Gundam"]);
    assert_eq!(json["pagination"]["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_pilot_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/pilots/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
