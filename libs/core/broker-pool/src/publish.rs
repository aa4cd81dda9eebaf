//! Thin publish helper over a JetStream handle acquired from the pool.

use crate::error::BrokerError;
use async_nats::jetstream::context::PublishAckFuture;
use async_nats::jetstream::Context;
use observability::BrokerMetrics;
use std::time::Instant;

/// Issues an async publish and returns the future that resolves once the
/// broker acknowledges the message — the caller decides how (and whether) to
/// wait on it.
///
/// Records `nats_publish_total{topic,status}` and
/// `nats_publish_duration_seconds{topic}` for the initial publish call (the
/// ack wait itself is metered separately, by the dispatcher).
pub async fn publish_async(
    jetstream: &Context,
    subject: &str,
    payload: Vec<u8>,
) -> Result<PublishAckFuture, BrokerError> {
    let started = Instant::now();
    let result = jetstream
        .publish(subject.to_string(), payload.into())
        .await
        .map_err(BrokerError::publish);

    let status = if result.is_ok() { "ok" } else { "error" };
    BrokerMetrics::record_publish(subject, status, started.elapsed().as_secs_f64());

    result
}
