//! KV store connector and typed operations over a Redis-compatible backend.
//!
//! Used to persist ack results (see `ack-dispatch`) keyed by correlation id
//! with a bounded TTL.
//!
//! # Example
//!
//! ```ignore
//! use kv_store::redis::{connect, KvStore};
//!
//! let conn = connect("redis://127.0.0.1:6379").await?;
//! let store = KvStore::new(conn);
//! store.set_with_ttl("some-id", "PENDING", std::time::Duration::from_secs(30)).await?;
//! ```

pub mod common;
pub mod redis;

pub use common::{DatabaseError, DatabaseResult};
pub use redis::KvStore;
