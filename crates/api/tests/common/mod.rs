#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tokio_util::task::TaskTracker;
use tower::ServiceExt;

use studio_api::config::ServerConfig;
use studio_api::router::build_app_router;
use studio_api::state::AppState;
use studio_content::{ContentError, ContentStore, QueryParams};
use studio_mail::{ContactAddresses, MailError, Mailer, OutgoingEmail};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        site_name: "Northlight".to_string(),
    }
}

pub fn test_addresses() -> ContactAddresses {
    ContactAddresses {
        from: "Northlight <noreply@northlight.test>".to_string(),
        studio_inbox: "hello@northlight.test".to_string(),
        studio_name: "Northlight".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Fake content store
// ---------------------------------------------------------------------------

/// In-memory content store.
///
/// Answers every query with `default` unless a per-query response was
/// registered with [`FakeStore::on`]. `None` means "fail with a 503".
pub struct FakeStore {
    default: Option<Value>,
    by_query: HashMap<String, Option<Value>>,
    calls: Mutex<Vec<(String, QueryParams)>>,
}

impl FakeStore {
    pub fn returning(value: Value) -> Self {
        Self {
            default: Some(value),
            by_query: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            default: None,
            by_query: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on(mut self, query: &str, value: Value) -> Self {
        self.by_query.insert(query.to_string(), Some(value));
        self
    }

    pub fn calls(&self) -> Vec<(String, QueryParams)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentStore for FakeStore {
    async fn query(&self, query: &str, params: &QueryParams) -> Result<Value, ContentError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), params.clone()));

        let response = self.by_query.get(query).unwrap_or(&self.default);
        response.clone().ok_or_else(|| ContentError::Api {
            status: 503,
            body: "dataset unavailable".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Fake mailer
// ---------------------------------------------------------------------------

/// Records every send. Sends whose 1-based position is in `fail_on` fail.
#[derive(Default)]
pub struct FakeMailer {
    fail_on: Vec<usize>,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl FakeMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(fail_on: &[usize]) -> Self {
        Self {
            fail_on: fail_on.to_vec(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<Value, MailError> {
        let attempt = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };

        if self.fail_on.contains(&attempt) {
            return Err(MailError::Api {
                status: 422,
                body: "invalid recipient".to_string(),
            });
        }
        Ok(json!({ "id": format!("msg_{attempt}") }))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

pub struct TestApp {
    pub router: Router,
    pub store: Arc<FakeStore>,
    pub mailer: Arc<FakeMailer>,
    pub background: TaskTracker,
}

impl TestApp {
    /// Close the background tracker and wait for queued sends to finish.
    pub async fn drain_background(&self) {
        self.background.close();
        self.background.wait().await;
    }
}

pub fn build_test_state(store: Arc<FakeStore>, mailer: Arc<FakeMailer>) -> AppState {
    AppState {
        config: Arc::new(test_config()),
        content: store,
        mailer,
        mail_addresses: Arc::new(test_addresses()),
        background: TaskTracker::new(),
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(store: FakeStore, mailer: FakeMailer) -> TestApp {
    let store = Arc::new(store);
    let mailer = Arc::new(mailer);
    let state = build_test_state(Arc::clone(&store), Arc::clone(&mailer));
    let background = state.background.clone();

    TestApp {
        router: build_app_router(state, &test_config()),
        store,
        mailer,
        background,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn film_json(slug: &str, featured: bool, playback_id: Option<&str>) -> Value {
    json!({
        "_id": format!("film-{slug}"),
        "title": format!("Film {slug}"),
        "slug": slug,
        "category": "documentary",
        "description": "A film.",
        "year": 2023,
        "client": null,
        "featured": featured,
        "stills": null,
        "previewVideo": playback_id.map(|id| json!({ "playbackId": id, "status": "ready" })),
        "fullVideo": null
    })
}
