//! Diagnostic logging setup
//!
//! Logs go to stderr through `tracing-subscriber`, so command output on stdout
//! stays clean for piping. The filter is read from `PAYPLAN_LOG` using the
//! usual `EnvFilter` syntax.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "PAYPLAN_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
///
/// Without `PAYPLAN_LOG` only warnings are shown, or debug output for this
/// crate when `verbose` is set.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_directive = if verbose { "payplan=debug" } else { "warn" };
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        // Fails only if another subscriber is already installed
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
