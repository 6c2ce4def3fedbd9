#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pet_service::models::{Cat, Dog};
use pet_service::services::MemoryRepository;
use pet_service::startup::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestApp {
    pub state: AppState,
    pub cats: Arc<MemoryRepository<Cat>>,
    pub dogs: Arc<MemoryRepository<Dog>>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Response body is not JSON")
    }
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_repositories(MemoryRepository::new(), MemoryRepository::new())
    }

    pub fn with_repositories(cats: MemoryRepository<Cat>, dogs: MemoryRepository<Dog>) -> Self {
        let cats = Arc::new(cats);
        let dogs = Arc::new(dogs);
        let state = AppState::new(cats.clone(), dogs.clone());
        Self { state, cats, dogs }
    }

    /// App whose store rejects every call.
    pub fn unavailable() -> Self {
        Self::with_repositories(MemoryRepository::unavailable(), MemoryRepository::unavailable())
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str) -> TestResponse {
        self.send(Method::POST, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<serde_json::Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

/// Undo the HTML escaping applied to text in rendered pages.
pub fn unescape_html(text: &str) -> String {
    text.replace("&#x2f;", "/")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
