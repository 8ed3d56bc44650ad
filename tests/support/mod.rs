//! In-process stand-in for the wellness backend.

#![allow(dead_code)]

use axum::{
    extract::{Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TOKEN: &str = "tok-123";
pub const PASSWORD: &str = "secret";

#[derive(Clone, Default)]
pub struct MockBackend {
    inner: Arc<Inner>,
    pub base_url: String,
}

#[derive(Default)]
struct Inner {
    requests: AtomicUsize,
    failing: AtomicBool,
    failing_paths: Mutex<Vec<String>>,
    totals: Mutex<HashMap<&'static str, u32>>,
    paths: Mutex<Vec<String>>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let backend = Self {
            inner: Arc::default(),
            base_url: format!("http://{addr}"),
        };
        let app = router(backend.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        backend
    }

    pub fn requests(&self) -> usize {
        self.inner.requests.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.inner.paths.lock().unwrap().clone()
    }

    /// Every request answers 500 while set.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    /// Makes `path` answer 500 from now on.
    pub fn fail_path(&self, path: &str) {
        self.inner.failing_paths.lock().unwrap().push(path.to_string());
    }

    pub fn set_total(&self, key: &'static str, value: u32) {
        self.inner.totals.lock().unwrap().insert(key, value);
    }

    pub fn total(&self, key: &'static str) -> u32 {
        self.inner.totals.lock().unwrap().get(key).copied().unwrap_or(0)
    }

    fn bump(&self, key: &'static str) -> u32 {
        let mut totals = self.inner.totals.lock().unwrap();
        let total = totals.entry(key).or_insert(0);
        *total += 1;
        *total
    }
}

fn router(backend: MockBackend) -> Router {
    Router::new()
        .route("/api/ping/", get(|| async { Json(json!({ "message": "API is working" })) }))
        .route("/api/register/", post(|| async { Json(json!({ "message": "User registered" })) }))
        .route("/api/login/", post(login))
        .route("/api/logout/", post(|| async { Json(json!({ "message": "Logged out" })) }))
        .route(
            "/api/user/",
            get(|| async { Json(json!({ "id": 1, "username": "ada", "email": "ada@example.com" })) }),
        )
        .route("/api/hydration/log/", post(|State(b): State<MockBackend>| async move {
            Json(json!({ "total_today": b.bump("hydration") }))
        }))
        .route("/api/hydration/status/", get(|State(b): State<MockBackend>| async move {
            Json(json!({ "glasses_today": b.total("hydration"), "goal": 8 }))
        }))
        .route("/api/hydration/reset/", post(|State(b): State<MockBackend>| async move {
            b.set_total("hydration", 0);
            Json(json!({ "message": "reset" }))
        }))
        .route("/api/brushing/log/", post(|State(b): State<MockBackend>| async move {
            Json(json!({ "total_today": b.bump("brushing") }))
        }))
        .route("/api/brushing/status/", get(|State(b): State<MockBackend>| async move {
            Json(json!({ "brushing_today": b.total("brushing") }))
        }))
        .route("/api/breathing/log/", post(|State(b): State<MockBackend>| async move {
            Json(json!({ "total_today": b.bump("breathing") }))
        }))
        .route("/api/breathing/status/", get(|State(b): State<MockBackend>| async move {
            Json(json!({ "sessions_today": b.total("breathing") }))
        }))
        .route("/api/puzzles/submit/", post(|| async { Json(json!({ "message": "ok" })) }))
        .route("/api/puzzles/status/", get(|State(b): State<MockBackend>| async move {
            Json(json!({ "high_score_today": b.total("high_score") }))
        }))
        .route("/api/emotions/log/", post(|State(b): State<MockBackend>| async move {
            b.bump("mood");
            Json(json!({ "message": "logged" }))
        }))
        .route("/api/emotions/status/", get(|State(b): State<MockBackend>| async move {
            Json(json!({ "scenarios_today": b.total("mood") }))
        }))
        .route("/api/affirmations/submit/", post(|State(b): State<MockBackend>| async move {
            b.bump("affirmation");
            Json(json!({ "message": "saved" }))
        }))
        .route("/api/affirmations/status/", get(|State(b): State<MockBackend>| async move {
            Json(json!({ "affirmations_today": b.total("affirmation") }))
        }))
        .route("/api/brushing/detailed/", get(|State(b): State<MockBackend>| async move {
            let total = b.total("brushing");
            Json(json!({
                "brushing_today": total,
                "morning_completed": total >= 1,
                "night_completed": total >= 2
            }))
        }))
        .route("/api/puzzles/", get(|| async {
            Json(json!({ "puzzles": [{ "id": "brain_sprint", "type": "sequence", "difficulty": 1 }] }))
        }))
        .route("/api/emotions/session/", get(|| async {
            Json(json!({ "id": "scenario_1", "text": "You finished a hard task." }))
        }))
        .route("/api/emotions/tip/", get(|Query(query): Query<HashMap<String, String>>| async move {
            let mood = query.get("mood").cloned().unwrap_or_default();
            Json(json!({ "tip": format!("Tip for {mood}") }))
        }))
        .route("/api/affirmations/words/", get(|| async { Json(json!({ "words": ["I", "am", "brave"] })) }))
        .route("/api/affirmations/generate/", get(|Query(query): Query<HashMap<String, String>>| async move {
            let words = query.get("words").cloned().unwrap_or_default().replace(',', " ");
            Json(json!({ "generated_affirmation": format!("{words}.") }))
        }))
        .route("/api/tip/", get(|| async {
            Json(json!({ "tip": "Take deep breaths throughout the day.", "date": "2026-10-19" }))
        }))
        .route("/api/affirmations/history/", get(|State(b): State<MockBackend>| async move {
            let history: Vec<Value> = (0..b.total("affirmation"))
                .map(|n| json!({ "words": ["I", "grow"], "generated_affirmation": format!("entry {n}") }))
                .collect();
            Json(json!({ "history": history }))
        }))
        .route("/api/stats/reset/", post(|State(b): State<MockBackend>| async move {
            b.inner.totals.lock().unwrap().clear();
            Json(json!({ "message": "All stats reset" }))
        }))
        .layer(middleware::from_fn_with_state(backend.clone(), gate))
        .with_state(backend)
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == PASSWORD {
        Json(json!({ "session_token": TOKEN, "message": "Login successful" })).into_response()
    } else {
        detail(StatusCode::UNAUTHORIZED, "Invalid credentials")
    }
}

/// Counts requests, applies the failure switch and checks the bearer token.
async fn gate(State(backend): State<MockBackend>, request: Request, next: Next) -> Response {
    backend.inner.requests.fetch_add(1, Ordering::SeqCst);
    let path = request.uri().path().to_string();
    backend.inner.paths.lock().unwrap().push(path.clone());

    let path_fails = backend.inner.failing_paths.lock().unwrap().contains(&path);
    if path_fails || backend.inner.failing.load(Ordering::SeqCst) {
        return detail(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }

    let public = matches!(path.as_str(), "/api/ping/" | "/api/login/" | "/api/register/");
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(format!("Bearer {TOKEN}").as_str());
    if !public && !authorized {
        return detail(StatusCode::UNAUTHORIZED, "Invalid session");
    }

    next.run(request).await
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}
