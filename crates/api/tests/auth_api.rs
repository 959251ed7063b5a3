//! HTTP-level tests for login, token refresh, logout, lockout, and console
//! user management.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    admin_token, body_json, create_user, delete_auth, get_auth, post_auth, post_json,
    post_json_auth, TEST_PASSWORD,
};
use gunpla_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_returns_token_pair(pool: PgPool) {
    create_user(&pool, "mika", "editor").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "mika", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert!(json["data"]["refresh_token"].is_string());
    assert_eq!(json["data"]["expires_in"], 15 * 60);
    assert_eq!(json["data"]["user"]["role"], "editor");
    assert!(json["data"]["user"].get("password_hash").is_none());

    let user = UserRepo::find_by_username(&pool, "mika").await.unwrap().unwrap();
    assert!(user.last_login_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_with_wrong_password_returns_401(pool: PgPool) {
    create_user(&pool, "mika", "editor").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "mika", "password": "wrong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_for_unknown_user_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "nobody", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_failures_lock_the_account(pool: PgPool) {
    create_user(&pool, "mika", "editor").await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/auth/login",
            json!({"username": "mika", "password": "wrong-password"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is refused while locked.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "mika", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_lock_restarts_failure_count(pool: PgPool) {
    let user = create_user(&pool, "mika", "editor").await;

    for _ in 0..5 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/auth/login",
            json!({"username": "mika", "password": "wrong-password"}),
        )
        .await;
    }
    UserRepo::lock_account(&pool, user.id, Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    // One more mistake after the lock has run out is not enough to re-lock.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "mika", "password": "wrong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let user = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(user.failed_login_count, 1);
    assert!(user.locked_until.is_none());

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "mika", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotates_the_token(pool: PgPool) {
    create_user(&pool, "mika", "editor").await;

    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            json!({"username": "mika", "password": TEST_PASSWORD}),
        )
        .await,
    )
    .await;
    let refresh_token = login["data"]["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_ne!(json["data"]["refresh_token"], refresh_token.as_str());

    // The old refresh token was revoked by the rotation.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_refresh_mints_one_session(pool: PgPool) {
    create_user(&pool, "mika", "editor").await;

    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            json!({"username": "mika", "password": TEST_PASSWORD}),
        )
        .await,
    )
    .await;
    let refresh_token = login["data"]["refresh_token"].as_str().unwrap().to_string();

    let (first, second) = tokio::join!(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/auth/refresh",
            json!({"refresh_token": refresh_token}),
        ),
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/auth/refresh",
            json!({"refresh_token": refresh_token}),
        ),
    );
    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::OK, StatusCode::UNAUTHORIZED]);

    let live: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM user_sessions WHERE is_revoked = false")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(live, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_refresh_tokens(pool: PgPool) {
    create_user(&pool, "mika", "editor").await;

    let app = common::build_test_app(pool.clone());
    let login = body_json(
        post_json(
            app,
            "/api/v1/auth/login",
            json!({"username": "mika", "password": TEST_PASSWORD}),
        )
        .await,
    )
    .await;
    let access_token = login["data"]["access_token"].as_str().unwrap().to_string();
    let refresh_token = login["data"]["refresh_token"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, "/api/v1/auth/logout", &access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_creates_editor(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        json!({
            "username": "new_editor",
            "email": "new_editor@test.com",
            "password": "a-long-enough-password",
            "role": "editor"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "new_editor");
    assert!(json["data"].get("password_hash").is_none());

    let app = common::build_test_app(pool);
    let json = body_json(get_auth(app, "/api/v1/admin/users", &token).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_rejects_short_password_and_unknown_role(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        json!({
            "username": "shorty",
            "email": "shorty@test.com",
            "password": "short",
            "role": "editor"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/admin/users",
        json!({
            "username": "root",
            "email": "root@test.com",
            "password": "a-long-enough-password",
            "role": "superuser"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivated_user_cannot_log_in(pool: PgPool) {
    let token = admin_token(&pool).await;
    let editor = create_user(&pool, "leaving", "editor").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_auth(app, &format!("/api/v1/admin/users/{}", editor.id), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"username": "leaving", "password": TEST_PASSWORD}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_cannot_deactivate_self(pool: PgPool) {
    let token = admin_token(&pool).await;
    let admin = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();

    let app = common::build_test_app(pool);
    let response = delete_auth(app, &format!("/api/v1/admin/users/{}", admin.id), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
