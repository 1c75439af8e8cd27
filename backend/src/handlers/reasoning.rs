//! Advisory handler

use axum::{body::Bytes, extract::State, Json};
use shared::{AdvisoryRequest, AdvisoryResult};
use tracing::warn;

use crate::AppState;

/// Generate a flood advisory.
///
/// The body is read as JSON whatever its content type; only a body that
/// cannot be parsed gets the fixed fallback advisory.
pub async fn post_reasoning(State(state): State<AppState>, body: Bytes) -> Json<AdvisoryResult> {
    let service = &state.services.reasoning;
    match serde_json::from_slice::<AdvisoryRequest>(&body) {
        Ok(request) => Json(service.advise(request)),
        Err(err) => {
            warn!(error = %err, "Unreadable advisory request, returning fallback");
            Json(service.fallback())
        }
    }
}
