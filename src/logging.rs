//! Diagnostic logging
//!
//! stdout belongs to the monitoring agent, so everything here goes to
//! stderr. The filter comes from `SUNRAY_PLUGINS_LOG` when it is set.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "SUNRAY_PLUGINS_LOG";

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    })
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
