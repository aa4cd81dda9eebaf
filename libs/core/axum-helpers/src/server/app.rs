use crate::shutdown::{coordinated_shutdown, ShutdownCoordinator};
use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Binds `router` and serves it until a SIGINT/SIGTERM signal arrives, with
/// no cleanup phase beyond the graceful connection drain axum already does.
///
/// Prefer [`create_production_app`] for anything that owns connections (a
/// broker pool, a KV store) that need an ordered shutdown.
pub async fn create_app(router: Router, config: &ServerConfig) -> eyre::Result<()> {
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;
    info!(address = %addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(crate::shutdown::shutdown_signal())
        .await?;

    Ok(())
}

/// Wraps `router` with request tracing. Kept separate from [`create_app`] so
/// callers can layer additional middleware before serving.
pub fn create_router(router: Router) -> Router {
    router.layer(TraceLayer::new_for_http())
}

/// Serves `router` with ordered graceful shutdown: stop accepting new HTTP
/// connections, then run `cleanup` (typically draining the broker pool and
/// closing the KV connection) under `cleanup_timeout`.
///
/// `cleanup` only starts once a shutdown signal has fired, so in-flight
/// requests get a chance to finish against still-live dependencies.
pub async fn create_production_app<F>(
    router: Router,
    config: &ServerConfig,
    cleanup_timeout: Duration,
    cleanup: F,
) -> eyre::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;
    info!(address = %addr, "listening");

    let (coordinator, _rx) = ShutdownCoordinator::new();
    let cleanup_coordinator = coordinator.clone();

    let cleanup_handle = tokio::spawn(async move {
        cleanup_coordinator.subscribe().recv().await.ok();
        info!("running shutdown cleanup");
        match tokio::time::timeout(cleanup_timeout, cleanup).await {
            Ok(()) => info!("shutdown cleanup finished"),
            Err(_) => warn!(
                timeout_secs = cleanup_timeout.as_secs(),
                "shutdown cleanup timed out"
            ),
        }
    });

    axum::serve(listener, router)
        .with_graceful_shutdown(coordinated_shutdown(coordinator))
        .await?;

    if let Err(err) = cleanup_handle.await {
        error!(%err, "shutdown cleanup task panicked");
    }

    Ok(())
}
