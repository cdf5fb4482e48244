#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_or_default};

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_TABLE: &str = "products-db";

/// DynamoDB connection settings
///
/// Credentials are not part of this struct: they come from the standard AWS
/// provider chain (environment, web identity, instance profile, shared files).
///
/// # Example
///
/// ```ignore
/// use database::dynamodb::DynamoConfig;
///
/// let config = DynamoConfig::new("eu-west-1", "products")
///     .with_endpoint_url("http://localhost:8000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamoConfig {
    /// AWS region of the table
    pub region: String,

    /// Table holding the records, keyed by the string attribute `id`
    pub table_name: String,

    /// Endpoint override for DynamoDB Local or LocalStack
    pub endpoint_url: Option<String>,
}

impl DynamoConfig {
    pub fn new(region: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            table_name: table_name.into(),
            endpoint_url: None,
        }
    }

    /// Point the client at a non-AWS endpoint
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl Default for DynamoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION, DEFAULT_TABLE)
    }
}

/// Load DynamoConfig from environment variables
///
/// - `AWS_REGION` (default: `us-east-1`)
/// - `PRODUCTS_TABLE` (default: `products-db`)
/// - `DYNAMODB_ENDPOINT_URL` (optional)
#[cfg(feature = "config")]
impl FromEnv for DynamoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let table_name = env_or_default("PRODUCTS_TABLE", DEFAULT_TABLE);
        if table_name.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "PRODUCTS_TABLE".to_string(),
                details: "table name cannot be empty".to_string(),
            });
        }

        Ok(Self {
            region: env_or_default("AWS_REGION", DEFAULT_REGION),
            table_name,
            endpoint_url: env_optional("DYNAMODB_ENDPOINT_URL"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamo_config_new() {
        let config = DynamoConfig::new("eu-central-1", "catalog");
        assert_eq!(config.region(), "eu-central-1");
        assert_eq!(config.table_name(), "catalog");
        assert!(config.endpoint_url.is_none());
    }

    #[test]
    fn test_dynamo_config_default() {
        let config = DynamoConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.table_name, "products-db");
    }

    #[test]
    fn test_dynamo_config_with_endpoint_url() {
        let config = DynamoConfig::default().with_endpoint_url("http://localhost:8000");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_dynamo_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("AWS_REGION", None::<&str>),
                ("PRODUCTS_TABLE", None::<&str>),
                ("DYNAMODB_ENDPOINT_URL", None::<&str>),
            ],
            || {
                let config = DynamoConfig::from_env().unwrap();
                assert_eq!(config, DynamoConfig::default());
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_dynamo_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("AWS_REGION", Some("ap-south-1")),
                ("PRODUCTS_TABLE", Some("test-products")),
                ("DYNAMODB_ENDPOINT_URL", Some("http://localstack:4566")),
            ],
            || {
                let config = DynamoConfig::from_env().unwrap();
                assert_eq!(config.region, "ap-south-1");
                assert_eq!(config.table_name, "test-products");
                assert_eq!(
                    config.endpoint_url.as_deref(),
                    Some("http://localstack:4566")
                );
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_dynamo_config_from_env_rejects_blank_table() {
        temp_env::with_var("PRODUCTS_TABLE", Some("  "), || {
            let err = DynamoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_TABLE"));
        });
    }
}
