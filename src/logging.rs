//! Diagnostics go to stderr so stdout only ever carries the report.

fn parse_level() -> tracing::Level {
    match std::env::var("EUSGURI_LOG")
        .unwrap_or_else(|_| "warn".to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::WARN,
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(parse_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
