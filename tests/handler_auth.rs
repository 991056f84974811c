mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_register_returns_token(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "new@test.dev",
            "password": common::TEST_PASSWORD,
        }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[sqlx::test]
async fn test_register_token_is_usable(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "new@test.dev",
            "password": common::TEST_PASSWORD,
        }))
        .await;
    let body: Value = response.json();
    let token = body["token"].as_str().unwrap();

    let session = server
        .get("/auth/session")
        .add_header("authorization", common::bearer(token))
        .await;

    session.assert_status_ok();
    let session_body: Value = session.json();
    assert_eq!(session_body["authenticated"], json!(true));
    assert_eq!(session_body["user"]["email"], json!("new@test.dev"));
}

#[sqlx::test]
async fn test_register_weak_password_rejected(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    // No uppercase, no digit.
    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "weak@test.dev",
            "password": "alllowercase",
        }))
        .await;

    response.assert_status_bad_request();

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_register_disallowed_email_domain(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "user@example.com",
            "password": common::TEST_PASSWORD,
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_register_duplicate_email_conflict(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    common::create_test_user(&pool, "taken@test.dev").await;

    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": "taken@test.dev",
            "password": common::TEST_PASSWORD,
        }))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[sqlx::test]
async fn test_login_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    common::create_test_user(&pool, "login@test.dev").await;

    let response = server
        .post("/auth/login")
        .json(&json!({
            "email": "login@test.dev",
            "password": common::TEST_PASSWORD,
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[sqlx::test]
async fn test_login_failures_are_indistinguishable(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    common::create_test_user(&pool, "known@test.dev").await;

    let wrong_password = server
        .post("/auth/login")
        .json(&json!({
            "email": "known@test.dev",
            "password": "Wr0ngPassword",
        }))
        .await;

    let unknown_email = server
        .post("/auth/login")
        .json(&json!({
            "email": "ghost@test.dev",
            "password": common::TEST_PASSWORD,
        }))
        .await;

    assert_eq!(wrong_password.status_code(), 401);
    assert_eq!(unknown_email.status_code(), 401);

    let a: Value = wrong_password.json();
    let b: Value = unknown_email.json();
    assert_eq!(a["error"]["message"], b["error"]["message"]);
}

#[sqlx::test]
async fn test_session_anonymous(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/auth/session").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["authenticated"], json!(false));
    assert!(body.get("user").is_none());
}

#[sqlx::test]
async fn test_session_with_garbage_token(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server
        .get("/auth/session")
        .add_header("authorization", common::bearer("not-a-token"))
        .await;

    // Optional auth never rejects, it just reports anonymous.
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["authenticated"], json!(false));
}

#[sqlx::test]
async fn test_session_token_for_deleted_user(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "gone@test.dev").await;
    let token = common::mint_token(user_id, "gone@test.dev");

    sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = server
        .get("/auth/session")
        .add_header("authorization", common::bearer(&token))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["authenticated"], json!(false));
}
