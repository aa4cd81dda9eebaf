use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::{ready_status_code, run_health_checks, HealthCheckFuture, ReadyResponse};

use crate::state::AppState;

async fn ready_handler(State(state): State<AppState>) -> (axum::http::StatusCode, Json<ReadyResponse>) {
    let broker_pool = state.broker_pool.clone();
    let kv = state.kv.clone();

    let checks: Vec<(&str, HealthCheckFuture)> = vec![
        (
            "broker_pool",
            Box::pin(async move {
                if broker_pool.is_healthy().await {
                    Ok(())
                } else {
                    Err("no connected broker slots".to_string())
                }
            }),
        ),
        (
            "kv",
            Box::pin(async move { kv.ping().await.map_err(|err| err.to_string()) }),
        ),
    ];

    let response = run_health_checks(checks).await;
    (ready_status_code(response.ready), Json(response))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ready", get(ready_handler))
}
