//! Topic administration over the broker's stream API.

use crate::error::SnsError;
use crate::srn;
use async_nats::jetstream::stream::{Config as StreamConfig, DiscardPolicy, RetentionPolicy, StorageType};
use broker_pool::BrokerPool;
use std::time::Duration;
use tracing::instrument;

/// Per-subject max age for newly created topics: 96 hours.
const MAX_AGE: Duration = Duration::from_secs(96 * 3600);
/// Max single message size: 256 KiB.
const MAX_MESSAGE_SIZE: i32 = 262_144;

fn stream_config(name: &str, subject: &str) -> StreamConfig {
    StreamConfig {
        name: name.to_string(),
        subjects: vec![subject.to_string()],
        retention: RetentionPolicy::Limits,
        storage: StorageType::File,
        num_replicas: 1,
        discard: DiscardPolicy::Old,
        max_age: MAX_AGE,
        max_message_size: MAX_MESSAGE_SIZE,
        max_messages: -1,
        max_bytes: -1,
        duplicate_window: Duration::ZERO,
        allow_rollup: false,
        deny_delete: false,
        deny_purge: false,
        ..Default::default()
    }
}

/// Creates a topic as a durable stream with the contractual fixed attributes.
pub async fn create_topic(pool: &BrokerPool, name: &str, subject: &str) -> Result<(), SnsError> {
    let jetstream = pool.acquire().await;
    jetstream
        .create_stream(stream_config(name, subject))
        .await
        .map_err(|err| SnsError::Broker(broker_pool::BrokerError::jetstream(err)))?;
    Ok(())
}

/// Deletes a topic's backing stream.
pub async fn delete_topic(pool: &BrokerPool, name: &str) -> Result<(), SnsError> {
    let jetstream = pool.acquire().await;
    jetstream
        .delete_stream(name)
        .await
        .map_err(|err| SnsError::Broker(broker_pool::BrokerError::jetstream(err)))?;
    Ok(())
}

/// Lists every topic as its SRN, formatted with `region`/`account_id`.
#[instrument(skip(pool))]
pub async fn list_topics(pool: &BrokerPool, region: &str, account_id: &str) -> Result<Vec<String>, SnsError> {
    use futures::StreamExt;

    let jetstream = pool.acquire().await;
    let mut names = jetstream.stream_names();
    let mut topics = Vec::new();
    while let Some(name) = names.next().await {
        let name = name.map_err(|err| SnsError::Broker(broker_pool::BrokerError::jetstream(err)))?;
        topics.push(srn::format(region, account_id, &name));
    }
    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_config_fixed_attributes() {
        let config = stream_config("orders", "orders");
        assert_eq!(config.max_age, MAX_AGE);
        assert_eq!(config.max_message_size, 262_144);
        assert_eq!(config.max_messages, -1);
        assert_eq!(config.max_bytes, -1);
        assert_eq!(config.num_replicas, 1);
        assert!(!config.deny_delete);
        assert!(!config.deny_purge);
        assert!(!config.allow_rollup);
        assert_eq!(config.duplicate_window, Duration::ZERO);
    }
}
