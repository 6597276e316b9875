//! Shared test harness: a local stand-in for the BigCommerce API.
//!
//! The mock records every request it receives (method, path, headers, body)
//! and replies with canned responses in FIFO order, so tests can assert both
//! what the proxy sent upstream and how it reshapes what came back.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;

use checkgate::bigcommerce::BigCommerceClient;
use checkgate::state::AppState;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub path: String,
    pub body: Value,
    pub authorization: Option<String>,
    pub x_auth_token: Option<String>,
}

#[derive(Clone, Default)]
pub struct MockUpstream {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responses: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
}

impl MockUpstream {
    /// Queue the next canned reply, served in FIFO order.
    pub fn push_response(&self, status: StatusCode, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.into()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

async fn record(State(mock): State<MockUpstream>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    };

    mock.calls.lock().unwrap().push(RecordedCall {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        authorization: header("authorization"),
        x_auth_token: header("x-auth-token"),
    });

    let (status, body) = mock
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::INTERNAL_SERVER_ERROR, "{}".to_string()));

    (status, [("content-type", "application/json")], Body::from(body)).into_response()
}

/// Start the mock on an ephemeral port; returns it with its base URL.
pub async fn spawn_upstream() -> (MockUpstream, String) {
    let mock = MockUpstream::default();
    let app = Router::new().fallback(record).with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (mock, format!("http://{addr}"))
}

/// Build the application router pointed at the given upstream base URL.
pub fn app_with_upstream(base_url: &str) -> Router {
    let state = AppState {
        bigcommerce: BigCommerceClient::with_base_url(base_url, TEST_TOKEN),
    };
    checkgate::build_app(state)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).expect("response should be valid JSON")
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
