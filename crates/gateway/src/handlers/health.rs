//! Liveness and readiness probes

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Instant;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub checks: ReadyChecks,
}

#[derive(Debug, Serialize)]
pub struct ReadyChecks {
    pub database: DatabaseCheck,
}

/// Outcome of pinging the paper store; failure details stay in the logs
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DatabaseCheck {
    Up { latency_ms: u64 },
    Down,
}

impl DatabaseCheck {
    fn is_up(&self) -> bool {
        matches!(self, DatabaseCheck::Up { .. })
    }
}

/// Liveness: the process is serving requests
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Readiness: 200 while the paper store answers, 503 otherwise
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let start = Instant::now();

    let database = match state.papers.ping().await {
        Ok(()) => DatabaseCheck::Up {
            latency_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => {
            tracing::warn!(error = %e, code = ?e.code(), "Paper store unreachable");
            DatabaseCheck::Down
        }
    };

    let (status, label) = if database.is_up() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not_ready")
    };

    (
        status,
        Json(ReadyResponse {
            status: label,
            checks: ReadyChecks { database },
        }),
    )
}
