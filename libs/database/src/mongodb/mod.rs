//! MongoDB connector and utilities
//!
//! Provides client configuration, startup connection with retry, and a ping
//! probe for readiness checks.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{connect_from_config, connect_from_config_with_retry};
pub use health::check_health;

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
