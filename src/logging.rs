use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Pick the filter: an explicit override wins, then `RUST_LOG`, then config.
pub fn build_filter(override_filter: Option<&str>, config: &LogConfig) -> EnvFilter {
    if let Some(directives) = override_filter {
        if let Ok(filter) = EnvFilter::try_new(directives) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean.
pub fn init_tracing(override_filter: Option<&str>, config: &LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(override_filter, config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
