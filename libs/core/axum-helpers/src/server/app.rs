use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::middleware::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::IntoFuture;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - Request tracing and security headers
/// - CORS, only when `CORS_ALLOWED_ORIGIN` is set (comma-separated origins)
/// - Response compression
/// - JSON 404 fallback
///
/// Liveness (`/health`) is added by the app with [`super::health_router`].
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` contains an invalid header value.
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/v1/products", products_router);
/// let router = create_router::<ApiDoc>(api_routes)?;
/// ```
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_layer_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    let router = match cors_layer {
        Some(cors) => router.layer(cors),
        None => router,
    };

    // Compresses responses based on the Accept-Encoding header
    Ok(router.layer(CompressionLayer::new()))
}

/// Serve `router` until SIGINT/SIGTERM, then drain in-flight requests.
///
/// Draining is bounded by `shutdown_timeout`; connections still open after
/// that are dropped and the function returns.
///
/// # Example
/// ```ignore
/// use std::time::Duration;
/// use axum_helpers::server::create_production_app;
///
/// create_production_app(router, &config, Duration::from_secs(30)).await?;
/// ```
pub async fn create_production_app(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
) -> io::Result<()> {
    let coordinator = ShutdownCoordinator::new();
    let mut shutdown_rx = coordinator.subscribe();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal = coordinator.clone();
    let serve = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .into_future();
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => {
            return result.inspect_err(|e| {
                tracing::error!("Server encountered an error: {:?}", e);
            });
        }
        _ = shutdown_rx.recv() => {}
    }

    info!("Draining in-flight requests (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, serve).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                "Drain exceeded timeout of {:?}, forcing shutdown",
                shutdown_timeout
            );
            Ok(())
        }
    }
}
