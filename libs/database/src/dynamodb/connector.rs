use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use tracing::info;

use super::DynamoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Build a DynamoDB client without touching the network
///
/// Region and optional endpoint come from `config`; credentials are resolved
/// lazily by the default AWS provider chain on the first request.
///
/// # Example
/// ```ignore
/// use database::dynamodb::{DynamoConfig, connect};
///
/// let client = connect(&DynamoConfig::default()).await;
/// ```
pub async fn connect(config: &DynamoConfig) -> Client {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
    if let Some(ref endpoint_url) = config.endpoint_url {
        info!(endpoint_url = %endpoint_url, "Using custom DynamoDB endpoint");
        builder = builder.endpoint_url(endpoint_url);
    }

    Client::from_conf(builder.build())
}

/// Build a client and verify the configured table exists
///
/// # Example
/// ```ignore
/// use database::dynamodb::connect_from_config;
/// use core_config::FromEnv;
///
/// let config = DynamoConfig::from_env()?;
/// let client = connect_from_config(&config).await?;
/// ```
pub async fn connect_from_config(config: &DynamoConfig) -> DatabaseResult<Client> {
    info!(
        region = %config.region,
        table = %config.table_name,
        "Connecting to DynamoDB"
    );

    let client = connect(config).await;
    verify_table(&client, &config.table_name).await?;

    info!(table = %config.table_name, "Successfully connected to DynamoDB");
    Ok(client)
}

/// [`connect_from_config`] with exponential backoff on failure
///
/// Only the startup verification is retried. Passing `None` uses
/// [`RetryConfig::default`].
///
/// # Example
/// ```ignore
/// use database::common::RetryConfig;
/// use database::dynamodb::connect_from_config_with_retry;
///
/// let retry = RetryConfig::new().with_max_retries(5).with_initial_delay(500);
/// let client = connect_from_config_with_retry(&config, Some(retry)).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: &DynamoConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<Client> {
    let retry_config = retry_config.unwrap_or_default();

    info!(
        max_retries = retry_config.max_retries,
        table = %config.table_name,
        "Connecting to DynamoDB with retry"
    );

    let client = connect(config).await;
    retry_with_backoff(|| verify_table(&client, &config.table_name), retry_config).await?;

    info!(table = %config.table_name, "Successfully connected to DynamoDB");
    Ok(client)
}

async fn verify_table(client: &Client, table_name: &str) -> DatabaseResult<()> {
    client
        .describe_table()
        .table_name(table_name)
        .send()
        .await
        .map(|_| ())
        .map_err(|e| {
            DatabaseError::ConnectionFailed(format!(
                "table '{}' is not reachable: {}",
                table_name,
                DisplayErrorContext(&e)
            ))
        })
}
