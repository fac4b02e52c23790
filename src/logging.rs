//! Logging setup for the CLI.
//!
//! Diagnostics go to stderr through `tracing`; stdout carries results only.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "symbolpath=debug" } else { "warn" }
}

/// Install the stderr subscriber.
///
/// `debug` forces debug output for this crate; otherwise `RUST_LOG` decides,
/// falling back to warnings only. Calling this twice keeps the first
/// subscriber.
pub fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new(default_directive(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
