#![allow(dead_code)]

use std::{
    collections::{HashMap, HashSet},
    error::Error,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

pub const BUCKET: &str = "test-platform-results";

/// Results bucket and Slack webhook served over local HTTP.
#[derive(Default)]
pub struct FakeServer {
    objects: HashMap<String, String>,
    forbidden: HashSet<String>,
    messages: Mutex<Vec<String>>,
}

impl FakeServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `content` at `path` inside [`BUCKET`].
    pub fn with(mut self, path: &str, content: &str) -> Self {
        self.objects
            .insert(format!("{BUCKET}/{path}"), content.to_string());
        self
    }

    pub fn forbid(mut self, path: &str) -> Self {
        self.forbidden.insert(format!("{BUCKET}/{path}"));
        self
    }
}

pub struct TestContext {
    pub addr: SocketAddr,
    pub server: Arc<FakeServer>,
}

impl TestContext {
    pub async fn start(server: FakeServer) -> Result<Self, Box<dyn Error>> {
        let server = Arc::new(server);
        let app = Router::new()
            .route("/storage/{*path}", get(object))
            .route("/hook", post(hook))
            .route("/rejecting-hook", post(rejecting_hook))
            .with_state(server.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("test server failed");
        });
        Ok(Self { addr, server })
    }

    pub fn storage_url(&self) -> String {
        format!("http://{}/storage", self.addr)
    }

    pub fn hook_url(&self) -> String {
        format!("http://{}/hook", self.addr)
    }

    pub fn rejecting_hook_url(&self) -> String {
        format!("http://{}/rejecting-hook", self.addr)
    }

    /// Raw bodies received by the webhook.
    pub fn messages(&self) -> Vec<String> {
        self.server.messages.lock().unwrap().clone()
    }
}

async fn object(
    State(server): State<Arc<FakeServer>>,
    Path(path): Path<String>,
) -> (StatusCode, String) {
    let path = path.trim_start_matches('/');
    if !path.starts_with(&format!("{BUCKET}/")) {
        return (
            StatusCode::NOT_FOUND,
            "<Error><Code>NoSuchBucket</Code><Message>The specified bucket does not exist.</Message></Error>"
                .to_string(),
        );
    }
    if server.forbidden.contains(path) {
        return (
            StatusCode::FORBIDDEN,
            "<Error><Code>AccessDenied</Code></Error>".to_string(),
        );
    }
    match server.objects.get(path) {
        Some(content) => (StatusCode::OK, content.clone()),
        None => (
            StatusCode::NOT_FOUND,
            "<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message></Error>"
                .to_string(),
        ),
    }
}

async fn hook(State(server): State<Arc<FakeServer>>, body: String) -> &'static str {
    server.messages.lock().unwrap().push(body);
    "ok"
}

async fn rejecting_hook() -> (StatusCode, &'static str) {
    (StatusCode::BAD_REQUEST, "invalid_payload")
}
