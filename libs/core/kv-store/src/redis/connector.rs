use observability::KvMetrics;
use redis::Client;
use redis::aio::ConnectionManager;
use tracing::info;

use super::RedisConfig;
use crate::common::{RetryConfig, retry, retry_with_backoff};

/// Connect to Redis and return a ConnectionManager
///
/// The ConnectionManager automatically handles connection failures and reconnections.
///
/// # Arguments
/// * `url` - Redis connection string (e.g., "redis://127.0.0.1:6379")
///
/// # Example
/// ```ignore
/// use kv_store::redis::connect;
/// use redis::AsyncCommands;
///
/// let mut conn = connect("redis://127.0.0.1:6379").await?;
/// conn.set::<_, _, ()>("key", "value").await?;
/// ```
pub async fn connect(url: &str) -> redis::RedisResult<ConnectionManager> {
    info!("Attempting to connect to Redis at {}", url);

    let client = Client::open(url)?;
    let manager = ConnectionManager::new(client).await?;

    // Verify connection with PING
    let mut conn = manager.clone();
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;

    info!("Successfully connected to Redis");
    Ok(manager)
}

/// Connect using a RedisConfig
///
/// This is the recommended way to connect when using configuration.
///
/// # Example
/// ```ignore
/// use kv_store::redis::{RedisConfig, connect_from_config};
///
/// let config = RedisConfig::new("redis://127.0.0.1:6379");
/// let conn = connect_from_config(config).await?;
/// ```
///
/// With FromEnv (requires `config` feature):
/// ```ignore
/// use kv_store::redis::connect_from_config;
/// use core_config::FromEnv;
///
/// let config = RedisConfig::from_env()?;
/// let conn = connect_from_config(config).await?;
/// ```
pub async fn connect_from_config(config: RedisConfig) -> redis::RedisResult<ConnectionManager> {
    connect(&config.url).await
}

/// Connect to Redis with automatic retry on failure
///
/// Uses exponential backoff with jitter to retry connection attempts.
/// Useful for handling transient network issues during startup.
///
/// # Example
/// ```ignore
/// use kv_store::redis::connect_with_retry;
/// use kv_store::common::RetryConfig;
///
/// // Default retry: 3 attempts, 100ms initial delay
/// let conn = connect_with_retry("redis://127.0.0.1:6379", None).await?;
///
/// // Custom retry: 5 attempts, 500ms initial delay
/// let config = RetryConfig::new()
///     .with_max_retries(5)
///     .with_initial_delay(500);
/// let conn = connect_with_retry("redis://127.0.0.1:6379", Some(config)).await?;
/// ```
pub async fn connect_with_retry(
    url: &str,
    retry_config: Option<RetryConfig>,
) -> redis::RedisResult<ConnectionManager> {
    let url_owned = url.to_string();
    let attempt = std::sync::atomic::AtomicU32::new(0);

    let operation = || {
        let url_owned = url_owned.clone();
        let this_attempt = attempt.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        async move {
            let result = connect(&url_owned).await;
            match &result {
                Ok(_) if this_attempt > 0 => KvMetrics::record_reconnect(),
                Err(_) => KvMetrics::record_connection_failure(),
                _ => {}
            }
            result
        }
    };

    match retry_config {
        Some(config) => retry_with_backoff(operation, config).await,
        None => retry(operation).await,
    }
}

/// Connect from config with automatic retry on failure
///
/// # Example
/// ```ignore
/// use kv_store::redis::{RedisConfig, connect_from_config_with_retry};
/// use kv_store::common::RetryConfig;
///
/// let config = RedisConfig::from_env()?;
/// let retry_config = RetryConfig::new().with_max_retries(5);
/// let conn = connect_from_config_with_retry(config, Some(retry_config)).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: RedisConfig,
    retry_config: Option<RetryConfig>,
) -> redis::RedisResult<ConnectionManager> {
    connect_with_retry(&config.url, retry_config).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual Redis
    async fn test_connect() {
        let redis_url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        let result = connect(&redis_url).await;
        assert!(result.is_ok());
    }
}
