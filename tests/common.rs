// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Scripted mock service, recording sleeper, and an in-process axum stub server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_recommender`

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use recipe_recommender::client::{RawResponse, RecommendationService};
use recipe_recommender::errors::{RecommendationError, RecommendationResult, TransportKind};
use recipe_recommender::models::{NutritionVector, RecipeRequest};
use recipe_recommender::retry::Sleeper;
use serde_json::{json, Map, Value};
use std::collections::{BTreeMap, VecDeque};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Nine-value vector accepted by the builder
pub fn valid_nutrition() -> NutritionVector {
    NutritionVector::new(vec![500.0, 25.0, 8.0, 100.0, 400.0, 100.0, 12.0, 15.0, 30.0])
}

/// Success body with one recipe per name
pub fn output_body(names: &[&str]) -> String {
    let output: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "Name": name,
                "Calories": 400,
                "RecipeIngredientParts": ["rice"],
                "RecipeInstructions": ["Cook"]
            })
        })
        .collect();
    json!({ "output": output }).to_string()
}

/// One scripted predict outcome
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Response with this status and body
    Respond(u16, String),
    /// No response
    Fail(TransportKind),
}

impl Scripted {
    pub fn ok(names: &[&str]) -> Self {
        Self::Respond(200, output_body(names))
    }

    pub fn status(status: u16) -> Self {
        Self::Respond(status, json!({"detail": "unavailable"}).to_string())
    }

    pub const fn timeout() -> Self {
        Self::Fail(TransportKind::Timeout)
    }

    pub const fn refused() -> Self {
        Self::Fail(TransportKind::Connect)
    }
}

/// In-memory service replaying a script; the last entry repeats once the script runs out
pub struct MockService {
    script: Mutex<VecDeque<Scripted>>,
    last: Mutex<Option<Scripted>>,
    predict_calls: AtomicUsize,
    requests: Mutex<Vec<RecipeRequest>>,
    healthy: bool,
    stats: Map<String, Value>,
    probe_delay: Option<Duration>,
}

impl MockService {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            predict_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            healthy: true,
            stats: Map::new(),
            probe_delay: None,
        }
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn with_stats(mut self, stats: Value) -> Self {
        if let Value::Object(map) = stats {
            self.stats = map;
        }
        self
    }

    /// Make health and stats probes hang for `delay`
    pub fn with_probe_delay(mut self, delay: Duration) -> Self {
        self.probe_delay = Some(delay);
        self
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecipeRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next_outcome(&self) -> Scripted {
        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(outcome) = next {
            *last = Some(outcome);
        }
        last.clone().expect("mock service script is empty")
    }
}

#[async_trait]
impl RecommendationService for MockService {
    fn base_url(&self) -> &str {
        "http://mock.test"
    }

    async fn check_health(&self) -> bool {
        if let Some(delay) = self.probe_delay {
            tokio::time::sleep(delay).await;
        }
        self.healthy
    }

    async fn get_stats(&self) -> Map<String, Value> {
        if let Some(delay) = self.probe_delay {
            tokio::time::sleep(delay).await;
        }
        self.stats.clone()
    }

    async fn predict(&self, request: &RecipeRequest) -> RecommendationResult<RawResponse> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match self.next_outcome() {
            Scripted::Respond(status, body) => Ok(RawResponse {
                status,
                url: "http://mock.test/predict".into(),
                headers: BTreeMap::from([("content-type".to_owned(), "application/json".to_owned())]),
                body,
                received_at: Utc::now(),
            }),
            Scripted::Fail(kind) => Err(RecommendationError::transport(kind, "scripted failure")),
        }
    }
}

/// Sleeper that records requested delays and returns immediately
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// What the stub server answers and what it saw
pub struct StubState {
    pub health_status: u16,
    pub stats_status: u16,
    pub stats_body: String,
    pub predict_status: u16,
    pub predict_body: String,
    pub seen_headers: Mutex<Vec<HeaderMap>>,
    pub seen_bodies: Mutex<Vec<Value>>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            health_status: 200,
            stats_status: 200,
            stats_body: json!({"recipes": 1000, "model": "knn"}).to_string(),
            predict_status: 200,
            predict_body: output_body(&["Stub Salad"]),
            seen_headers: Mutex::new(Vec::new()),
            seen_bodies: Mutex::new(Vec::new()),
        }
    }
}

fn status_of(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

async fn health(State(state): State<Arc<StubState>>) -> StatusCode {
    status_of(state.health_status)
}

async fn stats(State(state): State<Arc<StubState>>) -> (StatusCode, String) {
    (status_of(state.stats_status), state.stats_body.clone())
}

async fn predict(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    state.seen_headers.lock().unwrap().push(headers);
    state.seen_bodies.lock().unwrap().push(body);
    (status_of(state.predict_status), state.predict_body.clone())
}

/// Serve the stub on an ephemeral port; returns its base URL
pub async fn spawn_stub_server(state: Arc<StubState>) -> String {
    let app = Router::new()
        .route("/health", get(health))
        .route("/stats", get(stats))
        .route("/predict", post(predict))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port nothing listens on
pub async fn refused_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
