use tracing_subscriber::EnvFilter;

/// Crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["holiday_optimizer"];

/// Map a `-v` count to a level; `fallback` (from the config file) applies when no flag is given.
///
/// Mapping:
/// - 0 (none) -> fallback
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
pub fn level_for(verbosity: u8, fallback: &str) -> String {
    match verbosity {
        0 => fallback.to_lowercase(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Initialize tracing. Logs go to stderr so stdout carries only the report.
pub fn init(verbosity: u8, fallback: &str) {
    let level = level_for(verbosity, fallback);

    let filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
