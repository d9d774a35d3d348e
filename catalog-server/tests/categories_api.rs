mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_category() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/api/categories", json!({ "name": "Books" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Books");
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_duplicate_category_conflict() {
    let app = TestApp::new().await;
    app.seed_category("Books").await;

    let (status, body) = app
        .post_json("/api/categories", json!({ "name": "Books" }))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 6103);
    assert_eq!(body["message"], "Category already exists: Books");

    let (_, body) = app.get("/api/categories").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_in_id_order() {
    let app = TestApp::new().await;
    let toys = app.seed_category("Toys").await;
    let art = app.seed_category("Art").await;

    let (status, body) = app.get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": toys, "name": "Toys" },
            { "id": art, "name": "Art" },
        ])
    );
}

#[tokio::test]
async fn test_invalid_category_payloads() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post_json("/api/categories", json!({ "name": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);

    let (status, body) = app
        .post_json("/api/categories", json!({ "name": "x".repeat(201) }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "name");

    let (status, _) = app.post_raw("/api/categories", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/categories").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "catalog-server");
    assert_eq!(body["database"], "ok");
}
