#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use items_server::api::{self, AppState};
use items_server::config::Config;
use items_server::db::init_db;
use items_server::Repository;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub struct TestApp {
    pub app: axum::Router,
    pub repo: Arc<Repository>,
    pub temp: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let static_dir = temp_dir
        .path()
        .join("static")
        .to_string_lossy()
        .to_string();

    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));

    let mut env_map = HashMap::new();
    env_map.insert("PORT".to_string(), "0".to_string());
    env_map.insert("DATABASE_PATH".to_string(), db_path);
    env_map.insert("STATIC_DIR".to_string(), static_dir);
    let config = Config::from_env_map(env_map).expect("test config");

    let app = api::create_router(AppState::new(repo.clone(), config));

    TestApp {
        app,
        repo,
        temp: temp_dir,
    }
}

pub async fn send(app: &axum::Router, request: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &axum::Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn delete(app: &axum::Router, uri: &str) -> TestResponse {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

pub async fn json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> TestResponse {
    raw_json_request(app, method, uri, body.to_string()).await
}

pub async fn raw_json_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: String,
) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, req).await
}

pub async fn form_post(app: &axum::Router, uri: &str, body: &str) -> TestResponse {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}
