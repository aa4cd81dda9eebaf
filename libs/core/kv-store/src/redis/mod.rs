//! Redis database connector and utilities
//!
//! Provides connection management and Redis-specific helpers.

mod config;
mod connector;
mod kv;

pub use config::RedisConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use kv::KvStore;

// Re-export redis types for convenience
pub use redis::aio::ConnectionManager;
pub use redis::{AsyncCommands, Client, RedisResult};
