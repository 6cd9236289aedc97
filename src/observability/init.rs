//! Tracing subscriber setup.
//!
//! Wires `tracing` spans through `tracing-opentelemetry` into the JSON-lines
//! exporter. Installation is best-effort: when the data directory cannot be created
//! the crate simply runs without an exporter.

use super::exporter::{create_tracer_provider, SERVICE_NAME};
use crate::infrastructure::{expand_tilde, get_data_dir};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span export inside the data directory.
pub const TRACE_FILE_NAME: &str = "artistly-otlp.json";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, then `config.trace_level`, then
/// `"info"`. Spans are exported to `<data_dir>/artistly-otlp.json`, where
/// `data_dir` is `config.data_dir` or [`get_data_dir`].
///
/// Only the first call in a process installs anything; later calls are no-ops.
///
/// # Example
///
/// ```rust
/// use artistly::observability::init_tracing;
/// use artistly::Config;
///
/// let dir = std::env::temp_dir().join("artistly-doc");
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     data_dir: Some(dir),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let data_dir = config
        .data_dir
        .as_deref()
        .map_or_else(get_data_dir, expand_tilde);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = create_tracer_provider(data_dir.join(TRACE_FILE_NAME));
    let tracer = provider.tracer(SERVICE_NAME);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer));

    let _ = subscriber.try_init();
}
