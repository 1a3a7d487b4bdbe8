//! Subscriber setup for the plugin, its worker and the API service.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in the OTLP resource.
pub const SERVICE_NAME: &str = "galeria";

/// Level used when neither the configuration nor `RUST_LOG` names one.
pub const DEFAULT_LEVEL: &str = "info";

/// Installs the OTLP file subscriber for the plugin and worker threads.
///
/// Spans at or above `config.trace_level` (default `info`) are exported to
/// `galeria-otlp.json` in the plugin data directory. Observability is optional:
/// if the directory cannot be created nothing is installed. Calling this more
/// than once is harmless; only the first subscriber sticks.
///
/// # Example
///
/// ```no_run
/// use galeria::observability::init_tracing;
/// use galeria::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    if std::fs::create_dir_all(paths::get_data_dir()).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(paths::trace_path(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}

/// Installs a human-readable subscriber on stderr for the API service.
///
/// The filter comes from `RUST_LOG`, falling back to `info`.
pub fn init_api_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}
