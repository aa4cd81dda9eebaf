//! Shared application state handed to every request handler.

use ack_dispatch::AckDispatcher;
use broker_pool::BrokerPool;
use kv_store::KvStore;
use std::sync::Arc;

use crate::config::Config;

/// Cloned per request; everything behind an `Arc` (or already cheap to
/// clone, like [`KvStore`]'s connection manager) so cloning stays O(1).
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub broker_pool: Arc<BrokerPool>,
    pub dispatcher: Arc<AckDispatcher>,
    pub kv: KvStore,
}
