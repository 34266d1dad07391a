//! Loopback HTTP stub shared by the faucet and snap-bridge tests.

use std::collections::VecDeque;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

impl StubResponse {
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    pub fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is json")
    }
}

#[derive(Default)]
struct StubState {
    responses: VecDeque<StubResponse>,
    recorded: Vec<RecordedRequest>,
}

type SharedStub = Arc<Mutex<StubState>>;

/// Running stub server; shut down when dropped.
pub struct HttpStub {
    state: SharedStub,
    server: JoinHandle<()>,
}

impl HttpStub {
    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().recorded.clone()
    }
}

impl Drop for HttpStub {
    fn drop(&mut self) {
        self.server.abort();
    }
}

pub fn test_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build test http client")
}

/// Answers POST requests with `responses` in order. Once the script is used
/// up every further request gets a 500.
pub async fn spawn_http_stub(responses: Vec<StubResponse>) -> (String, HttpStub) {
    let state: SharedStub = Arc::new(Mutex::new(StubState {
        responses: responses.into(),
        recorded: Vec::new(),
    }));

    let router = Router::new()
        .route("/", post(record))
        .route("/faucet/:address", post(record))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve stub");
    });

    (format!("http://{addr}"), HttpStub { state, server })
}

async fn record(
    State(state): State<SharedStub>,
    method: Method,
    uri: Uri,
    body: String,
) -> Response {
    let next = {
        let mut stub = state.lock();
        stub.recorded.push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            body,
        });
        stub.responses.pop_front()
    };

    match next {
        Some(response) => {
            let status =
                StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                response.body,
            )
                .into_response()
        }
        None => (StatusCode::INTERNAL_SERVER_ERROR, "stub script exhausted").into_response(),
    }
}
