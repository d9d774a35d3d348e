//! Test harness: the full router over an in-memory database, driven with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use catalog_server::{ServerState, build_router};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = ServerState::in_memory().await.unwrap();
        Self {
            router: build_router(state.clone()),
            state,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    pub async fn seed_category(&self, name: &str) -> i64 {
        let (status, body) = self
            .post_json("/api/categories", json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    pub async fn seed_product(&self, name: &str, price: f64, category_id: i64) -> i64 {
        let (status, body) = self
            .post_json(
                "/api/products",
                json!({ "name": name, "price": price, "categoryId": category_id }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["id"].as_i64().unwrap()
    }

    /// Twelve products, `Product 01`..`Product 12`, priced 1.0..12.0, split
    /// over two categories. Returns the category ids.
    pub async fn seed_twelve(&self) -> (i64, i64) {
        let even = self.seed_category("Even").await;
        let odd = self.seed_category("Odd").await;
        for i in 1..=12 {
            let category = if i % 2 == 0 { even } else { odd };
            self.seed_product(&format!("Product {i:02}"), i as f64, category)
                .await;
        }
        (even, odd)
    }
}

pub fn names(body: &Value) -> Vec<String> {
    body["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

pub fn prices(items: &Value) -> Vec<f64> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["price"].as_f64().unwrap())
        .collect()
}
