//! Metrics for the broker connection pool and publish path.

use metrics::{counter, histogram};

/// Broker (NATS JetStream) metrics recorder
pub struct BrokerMetrics;

impl BrokerMetrics {
    /// Record a connection in the pool reconnecting after a drop
    pub fn record_reconnect(conn_name: &str) {
        counter!("nats_reconnect_total", "conn" => conn_name.to_string()).increment(1);
    }

    /// Record a connection in the pool going down
    pub fn record_disconnect(conn_name: &str) {
        counter!("nats_disconnect_total", "conn" => conn_name.to_string()).increment(1);
    }

    /// Record a publish attempt and its outcome
    pub fn record_publish(topic: &str, status: &str, duration_secs: f64) {
        counter!(
            "nats_publish_total",
            "topic" => topic.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
        histogram!("nats_publish_duration_seconds", "topic" => topic.to_string())
            .record(duration_secs);
    }
}
