//! Bounded worker pool that waits on JetStream publish acks and persists the
//! terminal outcome into the KV store.

use crate::error::AckDispatchError;
use crate::result::AckResult;
use crate::task::AckTask;
use kv_store::KvStore;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, Mutex as AsyncMutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn, Instrument};

const RESULT_TTL: Duration = Duration::from_secs(30);

/// Dispatches [`AckTask`]s to a fixed pool of workers, each of which races the
/// task's ack future against its timeout and records the outcome.
///
/// Workers share a single receiver behind an async mutex — the standard
/// multi-consumer pattern over a [`mpsc::Receiver`], since it can't be cloned.
pub struct AckDispatcher {
    sender: mpsc::Sender<AckTask>,
    receiver: Arc<AsyncMutex<mpsc::Receiver<AckTask>>>,
    stop_tx: broadcast::Sender<()>,
    worker_count: usize,
    kv: KvStore,
    handles: StdMutex<Vec<JoinHandle<()>>>,
}

impl AckDispatcher {
    /// `worker_count = 0` is treated as 1.
    pub fn new(queue_capacity: usize, worker_count: usize, kv: KvStore) -> Self {
        let (sender, receiver) = mpsc::channel(queue_capacity.max(1));
        let (stop_tx, _) = broadcast::channel(1);
        Self {
            sender,
            receiver: Arc::new(AsyncMutex::new(receiver)),
            stop_tx,
            worker_count: worker_count.max(1),
            kv,
            handles: StdMutex::new(Vec::new()),
        }
    }

    /// Spawns the worker pool. Safe to call once; calling again spawns an
    /// additional set of workers sharing the same queue.
    pub fn start(&self) {
        for i in 0..self.worker_count {
            let receiver = self.receiver.clone();
            let mut stop_rx = self.stop_tx.subscribe();
            let kv = self.kv.clone();

            let handle = tokio::spawn(async move {
                info!(worker = i, "ack dispatcher worker started");
                loop {
                    let task = {
                        let mut guard = receiver.lock().await;
                        tokio::select! {
                            biased;
                            task = guard.recv() => task,
                            _ = stop_rx.recv() => None,
                        }
                    };

                    match task {
                        Some(task) => process(&kv, task).await,
                        None => break,
                    }
                }
                info!(worker = i, "ack dispatcher worker stopped");
            });

            self.handles.lock().unwrap().push(handle);
        }
    }

    /// Enqueues a task, blocking (asynchronously) until queue capacity frees up.
    pub async fn enqueue(&self, task: AckTask) -> Result<(), AckDispatchError> {
        self.sender.send(task).await.map_err(|_| AckDispatchError::QueueClosed)
    }

    /// Signals all workers to stop once their current task finishes, and
    /// waits for them to exit. Queued-but-unstarted tasks are abandoned; their
    /// PENDING record expires naturally via the KV TTL.
    pub async fn stop(&self) {
        let _ = self.stop_tx.send(());
        let handles = std::mem::take(&mut *self.handles.lock().unwrap());
        for handle in handles {
            if let Err(err) = handle.await {
                error!(%err, "ack dispatcher worker panicked");
            }
        }
    }
}

async fn process(kv: &KvStore, task: AckTask) {
    let AckTask { id, span, ack_future, timeout } = task;
    let span = tracing::info_span!(parent: &span, "ack.wait", id = %id, seq = tracing::field::Empty);

    async {
        let outcome = tokio::select! {
            biased;
            ack = ack_future => match ack {
                Ok(ack) => {
                    tracing::Span::current().record("seq", ack.sequence);
                    AckResult::Ack { sequence: ack.sequence }
                }
                Err(err) => {
                    warn!(error = %err, "ack reception failure");
                    AckResult::Failed
                }
            },
            _ = tokio::time::sleep(timeout) => {
                warn!("ack receive timeout");
                AckResult::Timeout
            }
        };

        let json = match serde_json::to_string(&outcome) {
            Ok(json) => json,
            Err(err) => {
                error!(%err, "failed to serialize ack result");
                return;
            }
        };

        if let Err(err) = kv.set_with_ttl(&id, &json, RESULT_TTL).await {
            warn!(error = %err, id = %id, "failed to persist ack result");
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{TestNats, TestRedis};

    #[tokio::test]
    #[ignore] // requires docker for NATS + Redis containers
    async fn test_dispatcher_records_ack() {
        let nats = TestNats::new().await;
        let jetstream = nats.jetstream();
        jetstream
            .create_stream(async_nats::jetstream::stream::Config {
                name: "DISPATCH_TEST".to_string(),
                subjects: vec!["dispatch.>".to_string()],
                ..Default::default()
            })
            .await
            .unwrap();

        let redis = TestRedis::new().await;
        let conn = kv_store::redis::connect(redis.connection_string()).await.unwrap();
        let kv = KvStore::new(conn);

        let dispatcher = AckDispatcher::new(16, 2, kv.clone());
        dispatcher.start();

        let ack_future = jetstream.publish("dispatch.test", "hello".into()).await.unwrap();
        let task = AckTask::new("corr-1".to_string(), ack_future, Duration::from_secs(5));
        dispatcher.enqueue(task).await.unwrap();

        let mut observed = None;
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if let Some(value) = kv.get("corr-1").await.unwrap() {
                observed = Some(value);
                break;
            }
        }

        dispatcher.stop().await;

        let value = observed.expect("ack result was never persisted");
        assert!(value.contains("ACK"));
    }

    #[tokio::test]
    #[ignore] // requires docker for NATS + Redis containers
    async fn test_dispatcher_records_timeout() {
        let nats = TestNats::new().await;
        let jetstream = nats.jetstream();
        jetstream
            .create_stream(async_nats::jetstream::stream::Config {
                name: "DISPATCH_TIMEOUT_TEST".to_string(),
                subjects: vec!["dispatch-timeout.>".to_string()],
                ..Default::default()
            })
            .await
            .unwrap();

        let redis = TestRedis::new().await;
        let conn = kv_store::redis::connect(redis.connection_string()).await.unwrap();
        let kv = KvStore::new(conn);

        let dispatcher = AckDispatcher::new(16, 1, kv.clone());
        dispatcher.start();

        let ack_future = jetstream.publish("dispatch-timeout.test", "hi".into()).await.unwrap();
        let task = AckTask::new("corr-timeout".to_string(), ack_future, Duration::from_millis(1));
        dispatcher.enqueue(task).await.unwrap();

        tokio::time::sleep(Duration::from_millis(200)).await;
        dispatcher.stop().await;

        let value = kv.get("corr-timeout").await.unwrap();
        // either raced to ACK (fast broker ack) or timed out; both are valid outcomes
        // of the real race, but the record must exist.
        assert!(value.is_some());
    }
}
