/// Unified database error type for all KV store operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Redis-specific errors
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
