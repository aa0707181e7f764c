//! Fake generation backends for tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::app::GeneratePayload;
use crate::client::{GenerateResult, Generator};

/// Request bodies received by a fake backend.
#[derive(Clone, Default)]
pub(crate) struct Recorder(Arc<Mutex<Vec<Value>>>);

impl Recorder {
    pub(crate) fn bodies(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, body: Value) {
        self.0.lock().unwrap().push(body);
    }
}

/// The payload [`echo_backend`] answers for `prompt`.
pub(crate) fn echo_payload(prompt: &str) -> GeneratePayload {
    GeneratePayload {
        summary: format!("Summary of {}", prompt),
        drafts: BTreeMap::from([
            ("LinkedIn".to_string(), format!("LinkedIn post on {}", prompt)),
            ("Twitter".to_string(), format!("Tweet on {}", prompt)),
            ("Instagram".to_string(), format!("Caption on {}", prompt)),
        ]),
    }
}

/// Backend that answers every prompt with [`echo_payload`] and records each body.
///
/// Mirrors the reference backend: a blank prompt is answered with 400.
pub(crate) fn echo_backend(recorder: Recorder) -> Router {
    async fn generate(
        State(recorder): State<Recorder>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        recorder.push(body.clone());
        let prompt = body["prompt"].as_str().unwrap_or_default().trim().to_string();
        if prompt.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Missing 'prompt' field."})),
            );
        }
        (StatusCode::OK, Json(json!(echo_payload(&prompt))))
    }

    Router::new()
        .route("/api/generate", post(generate))
        .with_state(recorder)
}

/// Backend that always answers with the given status and raw body.
pub(crate) fn fixed_backend(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/api/generate",
        post(move || async move {
            (
                status,
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                body,
            )
        }),
    )
}

/// Serve `router` on an ephemeral port; returns the base URL (`.../api`).
pub(crate) async fn spawn_backend(router: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let url = format!("http://{}/api", addr);

    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (url, handle)
}

/// A base URL nothing is listening on.
pub(crate) async fn unreachable_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// Generator whose answers are released by the test, one gate per prompt.
#[derive(Default)]
pub(crate) struct GatedGenerator {
    gates: Mutex<HashMap<String, oneshot::Receiver<GenerateResult<GeneratePayload>>>>,
}

impl GatedGenerator {
    pub(crate) fn gate(&self, prompt: &str) -> oneshot::Sender<GenerateResult<GeneratePayload>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(prompt.to_string(), rx);
        tx
    }
}

impl Generator for GatedGenerator {
    async fn generate(&self, prompt: &str) -> GenerateResult<GeneratePayload> {
        let rx = {
            let mut gates = self.gates.lock().unwrap();
            gates.remove(prompt)
        };
        rx.expect("no gate for prompt").await.expect("gate dropped")
    }
}

/// Generator that answers every prompt with [`echo_payload`] immediately.
pub(crate) struct InstantGenerator;

impl Generator for InstantGenerator {
    async fn generate(&self, prompt: &str) -> GenerateResult<GeneratePayload> {
        Ok(echo_payload(prompt))
    }
}
