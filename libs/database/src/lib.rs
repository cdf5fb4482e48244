//! Database library providing connectors and utilities for the stores used by the services
//!
//! # Features
//!
//! - `dynamodb` (default) - AWS DynamoDB client construction and table health checks
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Examples
//!
//! ## DynamoDB
//!
//! ```ignore
//! use database::dynamodb::{self, DynamoConfig};
//!
//! let config = DynamoConfig::new("us-east-1", "products-db");
//! let client = dynamodb::connect_from_config_with_retry(&config, None).await?;
//! let healthy = dynamodb::check_health(&client, config.table_name()).await;
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
