//! Metrics and observability utilities
//!
//! Prometheus-style metrics with standardized naming conventions.

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Unit};
use std::time::Instant;

/// Metrics prefix for all Papercat metrics
pub const METRICS_PREFIX: &str = "papercat";

/// Histogram buckets for request latency (in seconds)
pub const LATENCY_BUCKETS: &[f64] = &[
    0.001,  // 1ms
    0.005,  // 5ms
    0.010,  // 10ms
    0.025,  // 25ms
    0.050,  // 50ms
    0.100,  // 100ms
    0.250,  // 250ms
    0.500,  // 500ms
    1.000,  // 1s
    5.000,  // 5s
];

/// Register all metric descriptions
pub fn register_metrics() {
    // Request metrics
    describe_counter!(
        format!("{}_requests_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of HTTP requests"
    );

    describe_histogram!(
        format!("{}_request_duration_seconds", METRICS_PREFIX),
        Unit::Seconds,
        "HTTP request latency in seconds"
    );

    // Catalog metrics
    describe_counter!(
        format!("{}_search_queries_total", METRICS_PREFIX),
        Unit::Count,
        "Total number of filtered paper listings"
    );

    describe_gauge!(
        format!("{}_search_results_count", METRICS_PREFIX),
        Unit::Count,
        "Number of papers returned by the last listing"
    );

    describe_counter!(
        format!("{}_importance_toggles_total", METRICS_PREFIX),
        Unit::Count,
        "Total importance flag flips"
    );

    // Fixture loading
    describe_counter!(
        format!("{}_fixture_records_loaded_total", METRICS_PREFIX),
        Unit::Count,
        "Total paper records written by the fixture loader"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record request metrics
pub struct RequestMetrics {
    start: Instant,
    endpoint: String,
    method: String,
}

impl RequestMetrics {
    /// Start tracking a request
    pub fn start(method: &str, endpoint: &str) -> Self {
        Self {
            start: Instant::now(),
            endpoint: endpoint.to_string(),
            method: method.to_string(),
        }
    }

    /// Record request completion
    pub fn finish(self, status: u16) {
        let duration = self.start.elapsed().as_secs_f64();

        counter!(
            format!("{}_requests_total", METRICS_PREFIX),
            "method" => self.method.clone(),
            "endpoint" => self.endpoint.clone(),
            "status" => status.to_string()
        )
        .increment(1);

        histogram!(
            format!("{}_request_duration_seconds", METRICS_PREFIX),
            "method" => self.method,
            "endpoint" => self.endpoint
        )
        .record(duration);
    }
}

/// Record a paper listing; `filtered` is false when no search text was given
pub fn record_listing(filtered: bool, result_count: usize) {
    if filtered {
        counter!(format!("{}_search_queries_total", METRICS_PREFIX)).increment(1);
    }

    gauge!(
        format!("{}_search_results_count", METRICS_PREFIX),
        "filtered" => filtered.to_string()
    )
    .set(result_count as f64);
}

/// Record an importance flip and the resulting value
pub fn record_importance_toggle(is_important: bool) {
    counter!(
        format!("{}_importance_toggles_total", METRICS_PREFIX),
        "is_important" => is_important.to_string()
    )
    .increment(1);
}

/// Record fixture rows written by the loader
pub fn record_fixture_load(records: u64) {
    counter!(format!("{}_fixture_records_loaded_total", METRICS_PREFIX)).increment(records);
}
