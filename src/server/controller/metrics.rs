use axum::{extract::State, http::header, response::IntoResponse};

use crate::server::{error::AppError, state::AppState};

/// Prometheus scrape endpoint.
pub async fn prometheus_metrics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.render()?;

    Ok(([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], body))
}
