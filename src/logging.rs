use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing` directive syntax).
pub const LOG_ENV: &str = "PTY_RELAY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Logs go to stderr; stdout carries the
/// terminal byte stream and must stay untouched.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
