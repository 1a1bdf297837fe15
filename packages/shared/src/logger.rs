//! Logger setup built on `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence over the default level passed by the caller.

use std::fmt;

use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
};

use crate::time::now_jst;

/// Timestamp format used in log lines
const LOG_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Log timer that prints the current time in JST
#[derive(Debug, Clone, Copy, Default)]
pub struct JstTimer;

impl FormatTime for JstTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", now_jst().format(LOG_TIME_FORMAT))
    }
}

/// Build the default filter directive for the given target.
///
/// Other crates are kept at `warn` so that only the caller's own logs follow
/// `default_level`.
fn default_directive(name: &str, default_level: &str) -> String {
    let target = name.replace('-', "_");
    format!("warn,{}={}", target, default_level)
}

/// Initialize the global tracing subscriber.
///
/// # Arguments
///
/// * `name` - Crate or binary name whose logs should use `default_level`
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. "debug")
///
/// # Returns
///
/// `true` if the subscriber was installed, `false` if one was already set.
pub fn setup_logger(name: &str, default_level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(name, default_level)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(JstTimer)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logger initialized for {} (default level: {})", name, default_level);
    }

    installed
}
