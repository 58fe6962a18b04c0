//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI document and fallbacks
//! - Health and readiness helpers
//! - Graceful shutdown with bounded cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let routes = api_routes.merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(routes)?;
//! create_production_app(router, &config, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
