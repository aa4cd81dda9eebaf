//! Error types for the broker connection pool.

use thiserror::Error;

/// Error that can occur in broker pool operations.
#[derive(Debug, Error)]
pub enum BrokerError {
    /// Failed to dial a broker connection.
    #[error("broker connection error: {0}")]
    Connect(#[from] async_nats::ConnectError),

    /// JetStream stream administration error (create/get/delete/list).
    #[error("jetstream error: {0}")]
    JetStream(String),

    /// Publish call failed, either at the initial send or awaiting the ack.
    #[error("publish error: {0}")]
    Publish(String),

    /// No connection in the pool could be acquired or reconnected.
    #[error("no healthy broker connection available")]
    PoolExhausted,
}

impl BrokerError {
    pub fn jetstream(error: impl std::fmt::Display) -> Self {
        Self::JetStream(error.to_string())
    }

    pub fn publish(error: impl std::fmt::Display) -> Self {
        Self::Publish(error.to_string())
    }
}
