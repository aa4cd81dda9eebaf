//! Waits on JetStream publish acks off the request path and persists the
//! terminal outcome into the KV store.
//!
//! An [`AckTask`] is created per async publish and handed to an
//! [`AckDispatcher`], which races the broker's ack future against a timeout
//! on one of a fixed pool of workers. The dispatcher's workers are spawned as
//! independent Tokio tasks, so an HTTP request's cancellation never reaches
//! them — the ack wait outlives the request that created it.
//!
//! # Example
//!
//! ```rust,ignore
//! use ack_dispatch::{AckDispatcher, AckTask};
//! use std::time::Duration;
//!
//! let dispatcher = AckDispatcher::new(100_000, 8, kv);
//! dispatcher.start();
//!
//! let ack_future = jetstream.publish(subject, payload.into()).await?;
//! dispatcher.enqueue(AckTask::new(id, ack_future, Duration::from_secs(5))).await?;
//! ```

mod dispatcher;
mod error;
mod result;
mod task;

pub use dispatcher::AckDispatcher;
pub use error::AckDispatchError;
pub use result::AckResult;
pub use task::{AckTask, DEFAULT_ACK_TIMEOUT};
