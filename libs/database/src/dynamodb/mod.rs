//! AWS DynamoDB client construction and table health checks

mod config;
mod connector;
mod health;

pub use config::DynamoConfig;
pub use connector::{connect, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health, check_health_detailed};

// Re-export the SDK client for convenience
pub use aws_sdk_dynamodb::Client;
