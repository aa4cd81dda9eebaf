//! Round-robin JetStream connection pool with self-healing reconnect.
//!
//! Owns `pool_size` broker connections named `SNS-API-Conn-<i>`, handing out
//! a healthy [`async_nats::jetstream::Context`] per request via
//! [`BrokerPool::acquire`]. A stale connection is reconnected in place the
//! next time it's picked, keeping slot indices stable across the pool's
//! lifetime.
//!
//! # Example
//!
//! ```rust,ignore
//! use broker_pool::{BrokerPool, BrokerPoolConfig};
//!
//! let config = BrokerPoolConfig::new("nats://localhost:4222", 3);
//! let pool = BrokerPool::connect(&config).await?;
//! let jetstream = pool.acquire().await;
//! ```

mod config;
mod error;
mod pool;
mod publish;

pub use config::BrokerPoolConfig;
pub use error::BrokerError;
pub use pool::BrokerPool;
pub use publish::publish_async;

// Re-export for callers that need to name JetStream types directly.
pub use async_nats::jetstream::context::PublishAckFuture;
pub use async_nats::jetstream::stream::Config as StreamConfig;
