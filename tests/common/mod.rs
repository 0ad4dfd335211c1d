//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

use story_relay::config::{RelayConfig, StaticSecrets};
use story_relay::RelayServer;

/// One request as seen by the stub upstream.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub workflow_id: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    calls: Arc<Mutex<Vec<CapturedCall>>>,
}

/// A workflow API stand-in that always answers with the same status and body.
pub struct StubUpstream {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<CapturedCall>>>,
}

#[allow(dead_code)]
impl StubUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v1/run", self.addr)
    }

    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn capture(
    State(stub): State<StubState>,
    Path(workflow_id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_text = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    stub.calls.lock().unwrap().push(CapturedCall {
        workflow_id,
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body,
    });
    (stub.status, stub.body).into_response()
}

/// Start a stub upstream on an ephemeral port.
pub async fn start_stub_upstream(status: u16, body: &'static str) -> StubUpstream {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        calls: calls.clone(),
    };
    let app = Router::new()
        .route("/api/v1/run/{workflow_id}", post(capture))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    StubUpstream { addr, calls }
}

/// Start a relay pointed at `base_url` and return its address.
pub async fn start_relay(base_url: String, secrets: StaticSecrets) -> SocketAddr {
    let mut config = RelayConfig::default();
    config.upstream.base_url = base_url;

    let server = RelayServer::with_secrets(config, Arc::new(secrets)).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, std::future::pending()).await;
    });

    addr
}

pub fn secrets() -> StaticSecrets {
    StaticSecrets::new()
        .with("WORKFLOW_ID", "wf_story")
        .with("AITUTOR_API_KEY", "sk-test")
}
