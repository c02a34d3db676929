//! Health endpoint — always answers, reporting store connectivity.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use wares_app::ports::{RecordRepository, StoreStatus};
use wares_domain::time::{self, Timestamp};

use crate::state::AppState;

/// Health report body.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Process liveness; always `"ok"` when the handler runs.
    pub status: &'static str,
    /// Store connection state: `"connected"` or `"disconnected"`.
    pub store: &'static str,
    /// Server time at the moment of the check.
    pub timestamp: Timestamp,
}

/// `GET /api/health` — never fails, regardless of store connectivity.
pub async fn check<R, S>(State(state): State<AppState<R, S>>) -> Json<HealthResponse>
where
    R: RecordRepository + Send + Sync + 'static,
    S: StoreStatus + Send + Sync + 'static,
{
    let store = if state.store_status.is_connected() {
        "connected"
    } else {
        "disconnected"
    };

    Json(HealthResponse {
        status: "ok",
        store,
        timestamp: time::now(),
    })
}
