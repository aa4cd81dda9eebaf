//! # Axum Helpers
//!
//! A small collection of utilities for building the broker facade's HTTP
//! surface on top of axum.
//!
//! ## Features
//!
//! - **Server Management**: server bootstrap with ordered graceful shutdown
//! - **Error Handling**: AWS-SNS-shaped error envelope for every response
//! - **Health Checks**: liveness/readiness endpoints
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     let api_routes = Router::new(); // Add your routes
//!     let app = api_routes.merge(health_router(app_info!()));
//!
//!     let config = ServerConfig::default();
//!     create_production_app(app, &config, std::time::Duration::from_secs(10), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod server;
pub mod shutdown;

// Re-export commonly used types
pub use errors::{not_found, with_not_found_fallback, AppError, ErrorBody, ErrorResponse};
pub use server::{
    create_app, create_production_app, create_router, health_router, ready_status_code,
    run_health_checks, HealthCheckFuture, HealthResponse, ReadyResponse, ServiceStatus,
};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
