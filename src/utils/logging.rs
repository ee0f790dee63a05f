use std::str::FromStr;
use tracing::Level;

/// Initialize tracing/logging for the application.
///
/// Unknown level strings fall back to `INFO`.
pub fn init(default_level: &str) {
    let lvl = Level::from_str(default_level).unwrap_or(Level::INFO);

    // Use try_init so tests can call this multiple times without panicking
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
}
