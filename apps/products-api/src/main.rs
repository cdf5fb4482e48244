//! Products API - REST server over DynamoDB

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        region = %config.dynamodb.region,
        table = %config.dynamodb.table_name,
        endpoint = ?config.dynamodb.endpoint_url,
        "Connecting to DynamoDB"
    );

    // Only startup is retried; request-path store calls fail fast
    let dynamodb =
        database::dynamodb::connect_from_config_with_retry(&config.dynamodb, None).await?;

    let state = AppState {
        config,
        dynamodb,
    };

    // Build REST router
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes)?;
    let app = router.merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on {}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    create_production_app(app, &state.config.server, Duration::from_secs(30))
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
