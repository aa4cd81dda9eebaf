//! Round-robin broker connection pool with self-healing reconnect.

use crate::config::BrokerPoolConfig;
use crate::error::BrokerError;
use async_nats::{Client, ConnectOptions};
use observability::BrokerMetrics;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

struct ConnectionSlot {
    client: Client,
    jetstream: async_nats::jetstream::Context,
}

/// Owns `pool_size` broker connections, handing out a healthy JetStream
/// handle per request and reconnecting individual slots on demand.
///
/// Slot indices are stable across reconnects: a reconnect replaces a slot's
/// contents in place rather than resizing the pool.
pub struct BrokerPool {
    url: String,
    slots: Vec<RwLock<ConnectionSlot>>,
    next: AtomicUsize,
}

async fn dial(url: &str, conn_name: String) -> Result<ConnectionSlot, BrokerError> {
    let disconnect_name = conn_name.clone();
    let reconnect_name = conn_name.clone();

    let client = ConnectOptions::new()
        .name(conn_name)
        .max_reconnects(Some(100))
        .reconnect_delay_callback(|_| Duration::from_secs(2))
        .ping_interval(Duration::from_secs(30))
        .disconnect_callback(move || {
            warn!(conn = %disconnect_name, "broker connection dropped");
            BrokerMetrics::record_disconnect(&disconnect_name);
        })
        .reconnect_callback(move || {
            info!(conn = %reconnect_name, "broker connection restored");
            BrokerMetrics::record_reconnect(&reconnect_name);
        })
        .connect(url)
        .await?;

    let jetstream = async_nats::jetstream::new(client.clone());
    Ok(ConnectionSlot { client, jetstream })
}

impl BrokerPool {
    /// Dials `config.pool_size` connections named `SNS-API-Conn-<i>` against
    /// `config.url`. Fails fast if any initial dial fails — a broken pool at
    /// startup should abort the process rather than serve half-healthy.
    pub async fn connect(config: &BrokerPoolConfig) -> Result<Self, BrokerError> {
        let mut slots = Vec::with_capacity(config.pool_size);
        for i in 0..config.pool_size {
            let conn_name = format!("SNS-API-Conn-{i}");
            info!(index = i, name = %conn_name, "dialing broker connection");
            let slot = dial(&config.url, conn_name).await?;
            slots.push(RwLock::new(slot));
        }

        info!(pool_size = config.pool_size, "broker pool ready");

        Ok(Self {
            url: config.url.clone(),
            slots,
            next: AtomicUsize::new(0),
        })
    }

    /// Returns a JetStream handle from a healthy connection, self-healing a
    /// stale slot in place if needed.
    ///
    /// Picks the next slot round-robin; if it's disconnected, attempts a
    /// synchronous reconnect and replaces the slot on success. On failure,
    /// advances to the next index, trying up to `pool_size` slots total. If
    /// every slot fails, falls back to slot 0's (possibly unhealthy) handle
    /// and logs an error — the caller will surface the failure on use.
    pub async fn acquire(&self) -> async_nats::jetstream::Context {
        let pool_size = self.slots.len();

        for attempt in 0..pool_size {
            let idx = (self.next.fetch_add(1, Ordering::Relaxed) + attempt) % pool_size;

            {
                let guard = self.slots[idx].read().await;
                if guard.client.connection_state() == async_nats::connection::State::Connected {
                    return guard.jetstream.clone();
                }
            }

            warn!(index = idx, "broker connection unhealthy, reconnecting");
            let conn_name = format!("SNS-API-Conn-{idx}");
            match dial(&self.url, conn_name).await {
                Ok(new_slot) => {
                    let jetstream = new_slot.jetstream.clone();
                    *self.slots[idx].write().await = new_slot;
                    info!(index = idx, "broker connection reconnected");
                    return jetstream;
                }
                Err(err) => {
                    error!(index = idx, error = %err, "broker reconnect failed");
                }
            }
        }

        error!("no healthy broker connection after trying all pool slots, falling back to slot 0");
        self.slots[0].read().await.jetstream.clone()
    }

    /// Returns true if at least one pool slot is connected. Used for readiness.
    pub async fn is_healthy(&self) -> bool {
        for slot in &self.slots {
            if slot.read().await.client.connection_state()
                == async_nats::connection::State::Connected
            {
                return true;
            }
        }
        false
    }

    /// Drains and closes every connection in the pool.
    pub async fn shutdown(&self) {
        for (i, slot) in self.slots.iter().enumerate() {
            let guard = slot.read().await;
            if let Err(err) = guard.client.drain().await {
                warn!(index = i, error = %err, "error draining broker connection");
            } else {
                info!(index = i, "broker connection drained");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // requires a running broker
    async fn test_connect_and_acquire() {
        let config = BrokerPoolConfig::new("nats://127.0.0.1:4222", 2);
        let pool = BrokerPool::connect(&config).await.unwrap();
        let _jetstream = pool.acquire().await;
        assert!(pool.is_healthy().await);
        pool.shutdown().await;
    }
}
