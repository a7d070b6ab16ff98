//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the mapkit tracing subscriber.
///
/// Reads `MAPKIT_LOG` for per-target log levels, e.g.
/// `MAPKIT_LOG=mapkit::clone=debug,mapkit_core::codec=warn`.
/// Falls back to `mapkit=info` if `MAPKIT_LOG` is unset or invalid.
///
/// Idempotent. If the host already installed a global subscriber, that
/// subscriber is kept.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("MAPKIT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("mapkit=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
