//! Health endpoint reporting per-component status.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckStatus {
    fn ok() -> Self {
        Self {
            status: "ok",
            message: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
    pub cache: CheckStatus,
    pub activity_store: CheckStatus,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// Probes the database, the page cache, and the activity store.
///
/// # Endpoint
///
/// `GET /health`
///
/// Responds 200 when every component answers its probe and 503 with
/// the failing components named in the body otherwise. The database
/// probe is a `SELECT 1` round trip; the stores expose their own
/// liveness checks.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let checks = HealthChecks {
        database: check_database(&state).await,
        cache: probe(
            state.cache.health_check().await,
            "cache backend unreachable",
        ),
        activity_store: probe(
            state.activity_store.health_check().await,
            "activity store unreachable",
        ),
    };

    let healthy = checks.database.is_ok() && checks.cache.is_ok() && checks.activity_store.is_ok();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(response))
}

async fn check_database(state: &AppState) -> CheckStatus {
    match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db)
        .await
    {
        Ok(_) => CheckStatus::ok(),
        Err(e) => CheckStatus::failed(format!("database probe failed: {e}")),
    }
}

fn probe(alive: bool, failure: &str) -> CheckStatus {
    if alive {
        CheckStatus::ok()
    } else {
        CheckStatus::failed(failure)
    }
}
