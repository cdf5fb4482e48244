//! Service health and readiness endpoints

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::dynamodb::check_health_detailed;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "products-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// 200 when the products table answers DescribeTable, 503 otherwise
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "dynamodb",
        Box::pin(async {
            let status = check_health_detailed(&state.dynamodb, state.table_name()).await;
            tracing::debug!(latency_ms = status.response_time_ms, "DynamoDB readiness probe");
            if status.healthy {
                Ok(())
            } else {
                Err(status.message.unwrap_or_else(|| "unhealthy".to_string()))
            }
        }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/v1/ready", get(ready))
        .with_state(state)
}
