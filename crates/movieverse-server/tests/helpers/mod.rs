//! Test helpers for MovieVerse server integration tests
//!
//! Every test gets its own application wired to two `wiremock` servers, one
//! standing in for the catalog API and one for the backend project, plus a
//! temporary static directory holding a minimal client.
#![allow(dead_code)]

pub mod fixtures;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::MockServer;

use movieverse_server::{api, config::Config};

pub use fixtures::*;

pub const TMDB_API_KEY: &str = "tmdb-test-key";
pub const ANON_KEY: &str = "anon-test-key";
pub const IMAGE_BASE: &str = "https://image.test/t/p";
pub const INDEX_HTML: &str = "<!doctype html><title>MovieVerse</title><div id=\"app\"></div>";

pub struct TestApp {
    pub router: Router,
    pub catalog: MockServer,
    pub backend: MockServer,
    pub config: Config,
    _static_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let catalog = MockServer::start().await;
        let backend = MockServer::start().await;

        let static_dir = tempfile::tempdir().expect("Failed to create static dir");
        std::fs::write(static_dir.path().join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");
        std::fs::write(static_dir.path().join("app.js"), "// movieverse client")
            .expect("Failed to write app.js");

        let vars: HashMap<&str, String> = [
            ("TMDB_API_KEY", TMDB_API_KEY.to_string()),
            ("TMDB_BASE_URL", catalog.uri()),
            ("TMDB_IMAGE_BASE_URL", IMAGE_BASE.to_string()),
            ("SUPABASE_URL", backend.uri()),
            ("SUPABASE_ANON_KEY", ANON_KEY.to_string()),
            ("MOVIEVERSE_STATIC_DIR", static_dir.path().display().to_string()),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).cloned())
            .expect("Test configuration should be valid");
        let router = api::build_app(&config).expect("Failed to build app");

        Self {
            router,
            catalog,
            backend,
            config,
            _static_dir: static_dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router should not fail");

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(request(Method::GET, uri, None, None)).await
    }

    pub async fn get_with_token(&self, uri: &str, token: &str) -> TestResponse {
        self.send(request(Method::GET, uri, Some(token), None)).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(request(Method::POST, uri, token, Some(body))).await
    }
}

pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => builder.body(Body::empty()).expect("Failed to build request"),
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Response is not JSON ({}): {}",
                e,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Asserts the error envelope and returns its message.
    pub fn error(&self, expected_code: &str) -> String {
        let body = self.json();
        assert_eq!(body["success"], false, "expected error envelope: {}", body);
        assert_eq!(body["error"]["code"], expected_code, "unexpected code: {}", body);
        body["error"]["message"].as_str().unwrap_or_default().to_string()
    }
}
