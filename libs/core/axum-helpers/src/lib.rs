//! # Axum Helpers
//!
//! Utilities shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: Router setup with OpenAPI UIs, health checks, graceful shutdown
//! - **[`middleware`]**: HTTP middleware (CORS, security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: JSON body and query extractors with structured rejections
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
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router::<ApiDoc>(Router::new())?;
//!     create_production_app(router, &ServerConfig::default(), Duration::from_secs(30)).await
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks,
};

// Re-export HTTP middleware
pub use middleware::{create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{JsonBody, QueryParams};
