//! Metrics for the KV store (ack-result persistence) connection.

use metrics::counter;

/// KV store metrics recorder
pub struct KvMetrics;

impl KvMetrics {
    /// Record the connection manager reconnecting
    pub fn record_reconnect() {
        counter!("kv_reconnect_total").increment(1);
    }

    /// Record a failed connection attempt
    pub fn record_connection_failure() {
        counter!("kv_connection_failures_total").increment(1);
    }

    /// Record an action-dispatch API call outcome by action name and status
    pub fn record_api_call(action: &str, status: &str) {
        counter!(
            "api_call_total",
            "action" => action.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
    }
}
