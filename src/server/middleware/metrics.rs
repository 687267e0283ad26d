use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::server::state::AppState;

/// Path label for requests without a matched route template.
const UNMATCHED_PATH: &str = "unmatched";

/// Records count and latency of every routed request.
///
/// Installed as a route layer so the matched route template is available. A request
/// without one is labelled `unmatched`, keeping raw URIs out of the label set.
pub async fn track_metrics(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str())
        .unwrap_or(UNMATCHED_PATH)
        .to_string();

    let response = next.run(req).await;

    state
        .metrics
        .observe(&method, &path, response.status().as_u16(), start.elapsed());

    response
}
