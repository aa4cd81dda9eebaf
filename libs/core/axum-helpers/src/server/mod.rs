//! Server infrastructure module.
//!
//! This module provides:
//! - Server bootstrap with graceful shutdown
//! - Liveness/readiness endpoints
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let app = api_routes.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), Duration::from_secs(10), async {}).await?;
//! ```

pub mod app;
pub mod health;

pub use app::{create_app, create_production_app, create_router};
pub use health::{
    health_router, ready_status_code, run_health_checks, HealthCheckFuture, HealthResponse,
    ReadyResponse, ServiceStatus,
};
