#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use bf_player_diff::config::{AppConfig, EndpointSettings, HttpSettings};

/// In-process stand-in for Battlelog, keeper and a Discord webhook
pub struct MockBattlelog {
    pub profile_calls: AtomicUsize,
    pub keeper_calls: AtomicUsize,
    /// Profile call index from which the server reports itself unranked
    pub unranked_from_call: usize,
    pub profile_error: AtomicBool,
    pub webhook_status: StatusCode,
    pub webhook_posts: Mutex<Vec<Value>>,
    pub profile_paths: Mutex<Vec<String>>,
}

impl MockBattlelog {
    pub fn new() -> Self {
        Self {
            profile_calls: AtomicUsize::new(0),
            keeper_calls: AtomicUsize::new(0),
            unranked_from_call: usize::MAX,
            profile_error: AtomicBool::new(false),
            webhook_status: StatusCode::NO_CONTENT,
            webhook_posts: Mutex::new(Vec::new()),
            profile_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn unranked_from(mut self, call: usize) -> Self {
        self.unranked_from_call = call;
        self
    }

    pub fn failing_webhook(mut self) -> Self {
        self.webhook_status = StatusCode::INTERNAL_SERVER_ERROR;
        self
    }

    pub fn total_requests(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
            + self.keeper_calls.load(Ordering::SeqCst)
            + self.webhook_posts.lock().unwrap().len()
    }

    pub fn webhook_posts(&self) -> Vec<Value> {
        self.webhook_posts.lock().unwrap().clone()
    }
}

/// Serve the mock on an ephemeral port and return its base URL
pub async fn spawn(mock: Arc<MockBattlelog>) -> String {
    let app = Router::new()
        .route("/:game/servers/show/pc/:guid", get(profile))
        .route("/snapshot/:guid", get(keeper))
        .route("/webhook", post(webhook))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn config(base_url: &str) -> AppConfig {
    AppConfig {
        http: HttpSettings {
            timeout_secs: 5,
            use_env_proxy: false,
            ..HttpSettings::default()
        },
        endpoints: EndpointSettings {
            profile_base_url: base_url.to_string(),
            keeper_base_url: base_url.to_string(),
        },
    }
}

pub fn webhook_url(base_url: &str) -> String {
    format!("{}/webhook", base_url)
}

/// Header and data rows of a CSV log
pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header = reader.headers().unwrap().iter().map(String::from).collect();
    let rows = reader
        .records()
        .map(|row| row.unwrap().iter().map(String::from).collect())
        .collect();
    (header, rows)
}

async fn profile(
    State(mock): State<Arc<MockBattlelog>>,
    UrlPath((game, guid)): UrlPath<(String, String)>,
) -> Json<Value> {
    let call = mock.profile_calls.fetch_add(1, Ordering::SeqCst);
    mock.profile_paths.lock().unwrap().push(format!("{}/{}", game, guid));

    if mock.profile_error.load(Ordering::SeqCst) {
        return Json(json!({ "type": "error", "message": "SERVER_NOT_FOUND" }));
    }

    let server_type = if call >= mock.unranked_from_call { 4 } else { 1 };
    Json(json!({
        "type": "success",
        "message": {
            "SERVER_INFO": {
                "name": "#1 Mock Server",
                "slots": {
                    "1": { "current": 3, "max": 10 },
                    "2": { "current": 62, "max": 64 }
                },
                "serverType": server_type
            },
            "SERVER_PLAYERS": [{ "personaId": 1 }, { "personaId": 2 }]
        }
    }))
}

async fn keeper(State(mock): State<Arc<MockBattlelog>>) -> Json<Value> {
    mock.keeper_calls.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "snapshot": {
            "teamInfo": {
                "1": { "players": [1, 2, 3, 4, 5] },
                "2": { "players": [6, 7, 8] }
            }
        }
    }))
}

async fn webhook(State(mock): State<Arc<MockBattlelog>>, Json(body): Json<Value>) -> StatusCode {
    mock.webhook_posts.lock().unwrap().push(body);
    mock.webhook_status
}
