//! Log subscriber setup for the CLI
//!
//! Filter precedence: `RUST_LOG`, then the `-v` count, then `[logging] level`.
//! Events go to stderr so `--json` output on stdout stays parseable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogLevel;

/// Level implied by `-v` flags, if any were given
pub fn level_for_verbosity(verbose: u8) -> Option<LogLevel> {
    match verbose {
        0 => None,
        1 => Some(LogLevel::Info),
        2 => Some(LogLevel::Debug),
        _ => Some(LogLevel::Trace),
    }
}

/// Filter directive for this crate and everything else
pub fn filter_directive(verbose: u8, configured: LogLevel) -> String {
    let level = level_for_verbosity(verbose).unwrap_or(configured);
    format!("warn,pcdm_works={}", level.as_str())
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, configured: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, configured)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
