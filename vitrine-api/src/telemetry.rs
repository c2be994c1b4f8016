//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;
use vitrine_store::app_config::LoggerConfig;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level; `format = "text"` selects human-readable output, anything
/// else JSON.
pub fn init(config: &LoggerConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.format.eq_ignore_ascii_case("text") {
        builder.try_init()
    } else {
        builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_current_span(true)
            .with_target(false)
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!(e))
}

fn default_directives(level: &str) -> String {
    format!("{level},tower_http={level},axum::rejection=trace")
}
