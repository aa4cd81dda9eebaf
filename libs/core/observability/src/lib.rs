//! Observability utilities for the SNS-compatible broker facade.
//!
//! This crate provides:
//! - Prometheus metrics recording and export
//! - Custom metrics for the broker pool, KV store, and action dispatch
//! - Axum middleware for automatic request metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, BrokerMetrics};
//!
//! // Initialize metrics recorder
//! init_metrics();
//!
//! // Record broker operations
//! BrokerMetrics::record_publish("orders", "ok", 0.003);
//!
//! // Add metrics endpoint to router
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

pub mod broker;
pub mod kv;
pub mod middleware;

pub use broker::BrokerMetrics;
pub use kv::KvMetrics;
pub use middleware::MetricsLayer;

// Re-export metrics macros for convenience
pub use metrics::{counter, gauge, histogram};

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize the Prometheus metrics recorder.
///
/// This should be called once at application startup.
/// Returns the PrometheusHandle for rendering metrics.
pub fn init_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .expect("Failed to install Prometheus recorder");

        info!("Prometheus metrics recorder initialized");

        register_metric_descriptions();

        handle
    })
}

/// Get the metrics handle (must call init_metrics first)
pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

/// Register metric descriptions for documentation
fn register_metric_descriptions() {
    use metrics::describe_counter;
    use metrics::describe_histogram;

    // HTTP metrics
    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    // Broker pool metrics
    describe_counter!(
        "nats_reconnect_total",
        "Total broker pool connection reconnects by connection name"
    );
    describe_counter!(
        "nats_disconnect_total",
        "Total broker pool connection drops by connection name"
    );
    describe_counter!(
        "nats_publish_total",
        "Total broker publishes by topic and status"
    );
    describe_histogram!(
        "nats_publish_duration_seconds",
        "Broker publish round-trip duration in seconds"
    );

    // KV store metrics
    describe_counter!(
        "kv_reconnect_total",
        "Total KV store connection manager reconnects"
    );
    describe_counter!(
        "kv_connection_failures_total",
        "Total failed KV store connection attempts"
    );
    describe_counter!(
        "api_call_total",
        "Total action-dispatch API calls by action and status"
    );
}
