use axum::extract::State;
use axum::Json;

use crate::errors::ApiError;
use crate::handler_utils::run_blocking;
use crate::models::{LiveResponse, ReadyChecks, ReadyResponse};
use crate::state::AppState;

pub(crate) async fn live(State(state): State<AppState>) -> Json<LiveResponse> {
    Json(LiveResponse {
        status: "live",
        uptime_ms: state.started_at.elapsed().as_millis() as u64,
    })
}

pub(crate) async fn ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, ApiError> {
    let store = state.store.clone();
    let storage_available = run_blocking("ready", move || {
        Ok(match store.ping() {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "record store ping failed");
                false
            }
        })
    })
    .await?;

    if !storage_available {
        return Err(ApiError::service_unavailable("storage is not ready"));
    }

    Ok(Json(ReadyResponse {
        status: "ready",
        uptime_ms: state.started_at.elapsed().as_millis() as u64,
        checks: ReadyChecks { storage_available },
    }))
}
