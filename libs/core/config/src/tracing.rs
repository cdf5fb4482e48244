use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install the color-eyre panic and error report hooks.
///
/// Call first thing in `main`. Repeated calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default filter directives when `RUST_LOG` is not set.
fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,aws_config=warn,aws_smithy_runtime=warn,hyper=warn"
    } else {
        "debug,aws_config=info,aws_smithy_runtime=info,hyper=info,h2=info"
    }
}

/// Initialize the global tracing subscriber.
///
/// - Production (`APP_ENV=production`): flattened JSON lines for log aggregation.
/// - Development: pretty, multi-line human output.
///
/// Both include [`tracing_error::ErrorLayer`] so `eyre` reports carry span traces.
/// `RUST_LOG` overrides the default filter. Calling this more than once is a no-op,
/// which keeps tests that initialize tracing independent of each other.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => info!(?environment, "Tracing initialized"),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
