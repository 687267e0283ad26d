//! Prometheus metrics for the HTTP API.
//!
//! `Metrics` owns its own registry, so each `AppState` (and each test) exposes an
//! independent set of series. The scrape endpoint renders the registry in the text
//! exposition format.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::time::Duration;

use crate::server::error::AppError;

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
}

impl Metrics {
    /// Creates the registry and registers the HTTP request series.
    ///
    /// # Returns
    /// - `Ok(Metrics)` - Registry with `http_requests_total` and `http_request_duration_seconds`
    /// - `Err(prometheus::Error)` - A metric definition was rejected
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )?;
        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request latency in seconds",
            ),
            &["method", "path"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    /// Records one completed request.
    ///
    /// # Arguments
    /// - `method` - HTTP method
    /// - `path` - Matched route template such as `/api/groups/{id}`, never the raw URI
    /// - `status` - Response status code
    /// - `elapsed` - Time spent handling the request
    pub fn observe(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.http_requests_total
            .with_label_values(&[method, path, status.as_str()])
            .inc();
        self.http_request_duration_seconds
            .with_label_values(&[method, path])
            .observe(elapsed.as_secs_f64());
    }

    /// Renders every registered metric in the Prometheus text format.
    pub fn render(&self) -> Result<String, AppError> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| AppError::InternalError(e.to_string()))
    }
}
