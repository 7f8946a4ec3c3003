// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use chrono::Duration;
use serde_json::Value;
use tower::util::ServiceExt as _;

use neuralpulse_core::application::{
    commands::{articles::ArticleCommandSettings, auth::AdminCredentials},
    services::{ApplicationServices, ServiceSettings},
};
use neuralpulse_core::infrastructure::security::session_store::InMemorySessionStore;
use neuralpulse_core::presentation::http::{routes, state::HttpState};

use super::mocks::{
    ADMIN_PASSWORD, ADMIN_USERNAME, DummyClock, DummySlug, InMemoryRepos, PlainPasswordHasher,
    RecordingImageStore, RecordingProgress,
};

/// Services wired to in-memory collaborators, with handles kept for assertions.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub repos: Arc<InMemoryRepos>,
    pub images: Arc<RecordingImageStore>,
    pub progress: Arc<RecordingProgress>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_image_store(RecordingImageStore::new())
    }

    pub fn with_image_store(images: RecordingImageStore) -> Self {
        let repos = Arc::new(InMemoryRepos::new());
        let images = Arc::new(images);
        let progress = Arc::new(RecordingProgress::default());

        let settings = ServiceSettings {
            articles: ArticleCommandSettings::default(),
            admin: AdminCredentials {
                username: ADMIN_USERNAME.into(),
                password_hash: PlainPasswordHasher::hash_of(ADMIN_PASSWORD),
            },
            session_ttl: Duration::hours(1),
        };

        let services = ApplicationServices::new(
            repos.clone(),
            repos.clone(),
            repos.clone(),
            repos.clone(),
            images.clone(),
            Arc::new(PlainPasswordHasher),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(DummyClock),
            Arc::new(DummySlug),
            settings,
        )
        .with_progress(progress.clone());

        Self {
            services: Arc::new(services),
            repos,
            images,
            progress,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
            media_root: std::env::temp_dir(),
            allowed_origins: Vec::new(),
        };
        routes::build_router_with_rate_limiter(state, false)
    }
}

pub async fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Sign in as the test admin and return the session token.
pub async fn login(app: &axum::Router) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            &serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    read_json(resp).await["token"]
        .as_str()
        .expect("token in login response")
        .to_string()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
