use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;

use crate::common::DatabaseError;

/// Typed key-value operations over a Redis-compatible store.
///
/// Thin wrapper around a cloned [`ConnectionManager`] — cloning is cheap and
/// the manager already multiplexes/reconnects under the hood, so `KvStore`
/// itself is `Clone` and safe to share across tasks.
#[derive(Clone)]
pub struct KvStore {
    conn: ConnectionManager,
}

impl KvStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Sets `key` to `value` with an expiry of `ttl`.
    pub async fn set_with_ttl(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), DatabaseError> {
        let mut conn = self.conn.clone();
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds).await?;
        Ok(())
    }

    /// Returns the value for `key`, or `None` if it doesn't exist.
    pub async fn get(&self, key: &str) -> Result<Option<String>, DatabaseError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    /// Deletes the given keys. Returns the number of keys actually removed.
    pub async fn del(&self, keys: &[&str]) -> Result<u64, DatabaseError> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.conn.clone();
        let removed: u64 = conn.del(keys).await?;
        Ok(removed)
    }

    /// Sets `key` to `value` with no expiry.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), DatabaseError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    /// Sets a field within a hash at `key`.
    pub async fn hset(&self, key: &str, field: &str, value: &str) -> Result<(), DatabaseError> {
        let mut conn = self.conn.clone();
        conn.hset::<_, _, _, ()>(key, field, value).await?;
        Ok(())
    }

    /// Gets a field within a hash at `key`.
    pub async fn hget(&self, key: &str, field: &str) -> Result<Option<String>, DatabaseError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.hget(key, field).await?;
        Ok(value)
    }

    /// Pings the store; used for readiness checks.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut conn = self.conn.clone();
        let response: String = redis::cmd("PING").query_async(&mut conn).await?;
        if response != "PONG" {
            return Err(DatabaseError::HealthCheckFailed(format!(
                "unexpected PING response: {response}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // requires a running Redis instance
    async fn test_set_get_roundtrip() {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
        let conn = crate::redis::connect(&url).await.unwrap();
        let store = KvStore::new(conn);

        store
            .set_with_ttl("kv-store-test-key", "hello", Duration::from_secs(5))
            .await
            .unwrap();
        let value = store.get("kv-store-test-key").await.unwrap();
        assert_eq!(value.as_deref(), Some("hello"));

        let removed = store.del(&["kv-store-test-key"]).await.unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.get("kv-store-test-key").await.unwrap(), None);
    }
}
