use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use std::time::Instant;

/// Health check status for a DynamoDB table
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the table answered DescribeTable
    pub healthy: bool,
    /// Error details when unhealthy
    pub message: Option<String>,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

/// Check that `table_name` is reachable with a DescribeTable call
///
/// # Example
/// ```ignore
/// use database::dynamodb::check_health;
///
/// let healthy = check_health(&client, "products-db").await;
/// ```
pub async fn check_health(client: &Client, table_name: &str) -> bool {
    check_health_detailed(client, table_name).await.healthy
}

/// Like [`check_health`], with timing and the error message on failure
pub async fn check_health_detailed(client: &Client, table_name: &str) -> HealthStatus {
    let start = Instant::now();
    let result = client.describe_table().table_name(table_name).send().await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(DisplayErrorContext(&e).to_string()),
            response_time_ms,
        },
    }
}
