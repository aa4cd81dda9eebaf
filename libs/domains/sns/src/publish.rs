//! Async publish and ack-status lookup.

use crate::error::SnsError;
use ack_dispatch::{AckDispatcher, AckResult, AckTask, DEFAULT_ACK_TIMEOUT};
use broker_pool::BrokerPool;
use kv_store::KvStore;
use std::time::Duration;
use tracing::instrument;

const PENDING_TTL: Duration = Duration::from_secs(30);

/// Publishes `message` to `subject` (defaulting to `topic_name`), returning a
/// correlation id the caller can poll with [`check_status`].
///
/// Writes `PENDING` to the KV store before the ack task is enqueued, so a
/// concurrent `checkStatus` call never observes a gap where the id is
/// unknown. The ack wait itself happens off this call's stack, on one of the
/// dispatcher's workers.
#[instrument(skip(pool, dispatcher, kv, message))]
pub async fn publish_async(
    pool: &BrokerPool,
    dispatcher: &AckDispatcher,
    kv: &KvStore,
    topic_name: &str,
    message: &str,
    subject: &str,
) -> Result<String, SnsError> {
    validate_publish_fields(topic_name, message)?;
    let subject = if subject.is_empty() { topic_name } else { subject };

    let jetstream = pool.acquire().await;
    let ack_future = broker_pool::publish_async(&jetstream, subject, message.as_bytes().to_vec())
        .await
        .map_err(SnsError::Broker)?;

    let id = uuid::Uuid::new_v4().to_string();

    let pending = serde_json::to_string(&AckResult::Pending).expect("AckResult serializes");
    kv.set_with_ttl(&id, &pending, PENDING_TTL).await?;

    let task = AckTask::new(id.clone(), ack_future, DEFAULT_ACK_TIMEOUT);
    dispatcher.enqueue(task).await?;

    Ok(id)
}

fn validate_publish_fields(topic_name: &str, message: &str) -> Result<(), SnsError> {
    if topic_name.is_empty() || message.is_empty() {
        return Err(SnsError::MissingFields);
    }
    Ok(())
}

/// Looks up the terminal (or pending) status for a previously published message.
pub async fn check_status(kv: &KvStore, id: &str) -> Result<String, SnsError> {
    let raw = kv.get(id).await?.ok_or(SnsError::NotFound)?;
    let result: AckResult = serde_json::from_str(&raw).map_err(|_| SnsError::UnknownStatus)?;
    Ok(result.status_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_async_rejects_missing_fields() {
        // This is the exact check `publish_async` runs before touching the
        // pool, dispatcher, or KV store — exercised directly here since
        // those three require a live broker/Redis to construct.
        let err = validate_publish_fields("", "hello");
        assert!(matches!(err, Err(SnsError::MissingFields)));
        let err = validate_publish_fields("topic", "");
        assert!(matches!(err, Err(SnsError::MissingFields)));
    }
}
