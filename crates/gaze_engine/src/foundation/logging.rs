//! Logging utilities

pub use log::{debug, info, warn, error, trace};

use log::LevelFilter;

/// Initialize the logging system
///
/// `level` is the default filter (`"info"`, `"debug"`, ...). `RUST_LOG`
/// still takes precedence when set. Unknown levels fall back to `info`.
pub fn init(level: &str) {
    let filter = parse_level(level).unwrap_or_else(|| {
        eprintln!("warning: unknown log level '{level}', using info");
        LevelFilter::Info
    });

    // Ignore the error from a second initialization (e.g. several demos in one process)
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init();
}

/// Parse a level name into a filter, case-insensitively
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
