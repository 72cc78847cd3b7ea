#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Request, StatusCode},
};
use mergington_activities::ActivityStorage;
use mergington_activities::router::{AppState, app_router};
use mergington_activities::service::seed;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

/// Temp-file SQLite store, removed on drop.
pub struct TestDb {
    pub storage: ActivityStorage,
    pub path: PathBuf,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        for suffix in ["-wal", "-shm"] {
            let mut side = self.path.clone().into_os_string();
            side.push(suffix);
            let _ = fs::remove_file(side);
        }
    }
}

pub async fn temp_storage(tag: &str) -> TestDb {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "mergington-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", path.display());
    let storage = ActivityStorage::connect(&database_url)
        .await
        .expect("failed to open test database");
    storage
        .init_schema()
        .await
        .expect("failed to initialize schema");

    TestDb { storage, path }
}

pub fn static_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn app_for(db: &TestDb) -> Router {
    app_router(AppState::new(db.storage.clone()), static_dir())
}

/// Fresh store seeded with the default activities, plus a router over it.
pub async fn seeded_app(tag: &str) -> (Router, TestDb) {
    let db = temp_storage(tag).await;
    seed::seed_if_empty(&db.storage)
        .await
        .expect("failed to seed defaults");
    (app_for(&db), db)
}

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    let status = resp.status();
    let headers = resp.headers().clone();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, headers, body)
}

pub async fn send_json(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(app, method, uri).await;
    let value = serde_json::from_slice(&body).expect("response body was not JSON");
    (status, value)
}

/// Participant emails of one activity as reported by `GET /activities`.
pub async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (status, body) = send_json(app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(body[activity]["participants"].clone())
        .expect("participants was not a string array")
}
