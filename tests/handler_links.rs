mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "owner@test.dev").await;
    let token = common::mint_token(user_id, "owner@test.dev");

    let response = server
        .post("/api/links")
        .add_header("authorization", common::bearer(&token))
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["original_url"], json!("https://example.com/page"));
    assert_eq!(body["clicks_count"], json!(0));
    assert_eq!(body["short_code"].as_str().unwrap().len(), 6);
}

#[sqlx::test]
async fn test_create_link_normalizes_scheme(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "owner@test.dev").await;
    let token = common::mint_token(user_id, "owner@test.dev");

    let response = server
        .post("/api/links")
        .add_header("authorization", common::bearer(&token))
        .json(&json!({ "url": "go.dev" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(body["original_url"], json!("https://go.dev"));
}

#[sqlx::test]
async fn test_create_link_rejects_bad_url(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "owner@test.dev").await;
    let token = common::mint_token(user_id, "owner@test.dev");

    let response = server
        .post("/api/links")
        .add_header("authorization", common::bearer(&token))
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_create_link_requires_auth(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[sqlx::test]
async fn test_list_links_with_totals(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "owner@test.dev").await;
    let token = common::mint_token(user_id, "owner@test.dev");

    common::create_test_link(&pool, "aaa111", "https://example.com/a", user_id).await;
    common::create_test_link(&pool, "bbb222", "https://example.com/b", user_id).await;

    // Clicks through the redirect path so totals reflect real counting.
    server.get("/aaa111").await.assert_status(StatusCode::SEE_OTHER);
    server.get("/aaa111").await.assert_status(StatusCode::SEE_OTHER);

    let response = server
        .get("/api/links")
        .add_header("authorization", common::bearer(&token))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_links"], json!(2));
    assert_eq!(body["total_clicks"], json!(2));
    assert_eq!(body["links"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_list_does_not_leak_other_owners(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let alice = common::create_test_user(&pool, "alice@test.dev").await;
    let bob = common::create_test_user(&pool, "bob@test.dev").await;
    common::create_test_link(&pool, "alice1", "https://example.com/a", alice).await;
    common::create_test_link(&pool, "bob111", "https://example.com/b", bob).await;

    let token = common::mint_token(alice, "alice@test.dev");
    let response = server
        .get("/api/links")
        .add_header("authorization", common::bearer(&token))
        .await;

    let body: Value = response.json();
    assert_eq!(body["total_links"], json!(1));
    assert_eq!(body["links"][0]["short_code"], json!("alice1"));
}

#[sqlx::test]
async fn test_get_link_by_id(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "owner@test.dev").await;
    let link_id = common::create_test_link(&pool, "mine01", "https://example.com", user_id).await;
    let token = common::mint_token(user_id, "owner@test.dev");

    let response = server
        .get(&format!("/api/links/{link_id}"))
        .add_header("authorization", common::bearer(&token))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["short_code"], json!("mine01"));
}

#[sqlx::test]
async fn test_get_foreign_link_is_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let alice = common::create_test_user(&pool, "alice@test.dev").await;
    let bob = common::create_test_user(&pool, "bob@test.dev").await;
    let link_id = common::create_test_link(&pool, "bobs01", "https://example.com", bob).await;

    let token = common::mint_token(alice, "alice@test.dev");
    let response = server
        .get(&format!("/api/links/{link_id}"))
        .add_header("authorization", common::bearer(&token))
        .await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_link(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "owner@test.dev").await;
    let link_id = common::create_test_link(&pool, "gone01", "https://example.com", user_id).await;
    let token = common::mint_token(user_id, "owner@test.dev");

    let response = server
        .delete(&format!("/api/links/{link_id}"))
        .add_header("authorization", common::bearer(&token))
        .await;

    assert_eq!(response.status_code(), 204);

    // The short code stops resolving once the link is gone.
    server.get("/gone01").await.assert_status_not_found();

    let again = server
        .delete(&format!("/api/links/{link_id}"))
        .add_header("authorization", common::bearer(&token))
        .await;
    again.assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_foreign_link_is_not_found(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let alice = common::create_test_user(&pool, "alice@test.dev").await;
    let bob = common::create_test_user(&pool, "bob@test.dev").await;
    let link_id = common::create_test_link(&pool, "bobs02", "https://example.com", bob).await;

    let token = common::mint_token(alice, "alice@test.dev");
    let response = server
        .delete(&format!("/api/links/{link_id}"))
        .add_header("authorization", common::bearer(&token))
        .await;

    response.assert_status_not_found();

    // Bob's link is untouched.
    server.get("/bobs02").await.assert_status(StatusCode::SEE_OTHER);
}

#[sqlx::test]
async fn test_register_login_shorten_resolve_flow(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    server
        .post("/auth/register")
        .json(&json!({ "email": "alice@test.com", "password": "Passw0rd!" }))
        .await
        .assert_status(StatusCode::CREATED);

    let login: Value = server
        .post("/auth/login")
        .json(&json!({ "email": "alice@test.com", "password": "Passw0rd!" }))
        .await
        .json();
    let token = login["token"].as_str().unwrap().to_string();

    let created: Value = server
        .post("/api/links")
        .add_header("authorization", common::bearer(&token))
        .json(&json!({ "url": "go.dev" }))
        .await
        .json();
    let code = created["short_code"].as_str().unwrap().to_string();

    let redirect = server.get(&format!("/{code}")).await;
    assert_eq!(redirect.status_code(), 303);
    assert_eq!(redirect.header("location"), "https://go.dev");

    let listed: Value = server
        .get("/api/links")
        .add_header("authorization", common::bearer(&token))
        .await
        .json();
    assert_eq!(listed["links"][0]["clicks_count"], json!(1));
}

#[sqlx::test]
async fn test_expired_token_rejected(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_router(state)).unwrap();

    let user_id = common::create_test_user(&pool, "owner@test.dev").await;
    let token = linkcut::utils::token_codec::TokenCodec::new(common::TEST_SIGNING_SECRET, -1)
        .sign(user_id, "owner@test.dev")
        .unwrap();

    let response = server
        .get("/api/links")
        .add_header("authorization", common::bearer(&token))
        .await;

    response.assert_status_unauthorized();
}
