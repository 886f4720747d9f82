use axum::{extract::State, http::StatusCode};
use tracing::warn;

use crate::state::AppState;

/// `GET /readyz`: 503 until the database answers a ping.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            warn!(error = %e, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
