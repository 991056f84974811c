mod common;

use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_ok(pool: PgPool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(common::test_router(state)).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["database"], json!("ok"));
}
