use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{model::api::HealthDto, server::state::AppState};

/// Reports `UP` when the database answers a ping, `DOWN` with 503 otherwise.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "UP".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);

            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "DOWN".to_string(),
                }),
            )
        }
    }
}
