use axum::{middleware, routing::get, Router};
use axum_helpers::server::{create_production_app, health_router};
use broker_pool::BrokerPool;
use core_config::tracing::{init_tracing, install_color_eyre};
use kv_store::redis::{connect_from_config_with_retry, KvStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod state;

use ack_dispatch::AckDispatcher;
use config::Config;
use state::AppState;

/// Default bounded queue capacity for the ack dispatcher, sized for a
/// 100k-TPS publish target.
const ACK_QUEUE_CAPACITY: usize = 100_000;
const ACK_WORKER_COUNT: usize = 8;
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    observability::init_metrics();
    info!("Prometheus metrics initialized");

    let broker_pool_future = async {
        BrokerPool::connect(&config.broker_pool)
            .await
            .map_err(|e| eyre::eyre!("broker pool connection failed: {e}"))
    };
    let redis_future = async {
        connect_from_config_with_retry(config.redis.clone(), None)
            .await
            .map_err(|e| eyre::eyre!("Redis connection failed: {e}"))
    };

    let (broker_pool, redis_conn) = tokio::try_join!(broker_pool_future, redis_future)?;

    let broker_pool = Arc::new(broker_pool);
    let kv = KvStore::new(redis_conn);

    let dispatcher = Arc::new(AckDispatcher::new(ACK_QUEUE_CAPACITY, ACK_WORKER_COUNT, kv.clone()));
    dispatcher.start();

    let state = AppState { config, broker_pool: broker_pool.clone(), dispatcher: dispatcher.clone(), kv };

    let metrics_router = Router::new().route("/metrics", get(observability::metrics_handler));

    let app = api::routes()
        .with_state(state.clone())
        .layer(middleware::from_fn(observability::middleware::metrics_middleware))
        .merge(health_router(state.config.app))
        .merge(metrics_router);

    info!("starting broker facade with coordinated shutdown");

    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("shutting down: stopping ack dispatcher before draining broker connections");
        dispatcher.stop().await;
        broker_pool.shutdown().await;
        info!("shutdown cleanup complete");
    })
    .await
    .map_err(|e| eyre::eyre!("server error: {e}"))?;

    info!("broker facade shutdown complete");
    Ok(())
}
