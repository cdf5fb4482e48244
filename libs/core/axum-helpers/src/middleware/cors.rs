use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Creates a CORS layer for the given origins.
///
/// Configured with:
/// - Methods: GET, POST, PUT, DELETE, OPTIONS
/// - Headers: Content-Type, Authorization, Accept
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Parse a comma-separated origin list, skipping blank entries.
pub fn parse_allowed_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })
}

/// Build a CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Returns `Ok(None)` when the variable is unset or blank, so the API stays
/// same-origin only unless origins are configured explicitly.
pub fn cors_layer_from_env() -> io::Result<Option<CorsLayer>> {
    let Some(raw) = core_config::env_optional("CORS_ALLOWED_ORIGIN") else {
        info!("CORS_ALLOWED_ORIGIN not set, CORS layer disabled");
        return Ok(None);
    };

    let origins = parse_allowed_origins(&raw)?;
    if origins.is_empty() {
        return Ok(None);
    }

    info!("CORS configured with allowed origins: {}", raw);
    Ok(Some(create_cors_layer(origins)))
}
