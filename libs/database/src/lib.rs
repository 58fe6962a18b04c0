//! Database connectors and startup helpers.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB client configuration, connection and health checks
//! - `config` - Load [`mongodb::MongoConfig`] through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{MongoConfig, connect_from_config_with_retry};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "product-catalog");
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
