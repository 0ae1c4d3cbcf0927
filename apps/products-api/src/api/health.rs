use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Readiness probe: verifies the database connection with a real query.
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    match database::postgres::check_health(&state.db).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({"status": "ready", "database": "connected"})),
        )),
        Err(e) => {
            tracing::error!("Readiness check failed: {:?}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "not ready", "database": "disconnected"})),
            ))
        }
    }
}
