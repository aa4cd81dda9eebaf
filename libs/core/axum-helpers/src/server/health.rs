//! Liveness/readiness endpoints.
//!
//! Liveness (`/health`) only reports that the process is up. Readiness
//! (`/ready`) runs a set of async checks concurrently and reports `ready:
//! false` the moment any of them fails, without taking the process out of
//! rotation for liveness purposes.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use core_config::AppInfo;
use futures::future::join_all;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

/// A readiness check: resolves to `Ok(())` if the dependency is reachable.
pub type HealthCheckFuture = Pin<Box<dyn Future<Output = Result<(), String>> + Send>>;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

#[derive(Serialize, Default)]
pub struct ServiceStatus {
    pub broker_pool: bool,
    pub kv: bool,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub services: ServiceStatus,
}

async fn health_handler(State(app): State<AppInfo>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: app.name,
        version: app.version,
    })
}

/// Runs `checks` concurrently and folds the results into a [`ReadyResponse`].
///
/// `checks` is a fixed-size array of `(label, future)` pairs; only the
/// `"broker_pool"` and `"kv"` labels are currently interpreted, matching
/// [`ServiceStatus`]'s fields.
pub async fn run_health_checks(checks: Vec<(&str, HealthCheckFuture)>) -> ReadyResponse {
    let labels: Vec<&str> = checks.iter().map(|(label, _)| *label).collect();
    let results = join_all(checks.into_iter().map(|(_, fut)| fut)).await;

    let mut status = ServiceStatus::default();
    let mut ready = true;
    for (label, result) in labels.into_iter().zip(results) {
        let ok = match &result {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(check = label, error = %err, "readiness check failed");
                false
            }
        };
        ready &= ok;
        match label {
            "broker_pool" => status.broker_pool = ok,
            "kv" => status.kv = ok,
            _ => {}
        }
    }

    ReadyResponse {
        ready,
        services: status,
    }
}

/// Liveness-only router: always reports healthy once the process is serving.
///
/// Readiness is deliberately not mounted here, since it depends on
/// application state (broker pool, KV store) this crate doesn't know about;
/// callers build their own `/ready` route with [`run_health_checks`].
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

/// Maps a [`ReadyResponse::ready`] flag to the HTTP status it should be served with.
pub fn ready_status_code(ready: bool) -> StatusCode {
    if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
