//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog services.
//!
//! ## Modules
//!
//! - **[`errors`]**: the error normalizer (`AppError`) and error codes
//! - **[`validation`]**: declarative field rules
//! - **[`extractors`]**: `ValidatedFields`, which runs a rule set before the handler
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security headers
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use std::time::Duration;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes)?;
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{cors_layer_from_env, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse, ValidationErrorResponse};

// Re-export extractors
pub use extractors::{ValidatedFields, ValidatedPayload};

// Re-export validation types
pub use validation::{Check, FieldRule, FieldViolation, RuleSet};
