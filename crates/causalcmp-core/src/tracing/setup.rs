//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize logging for the comparison engine.
///
/// Reads `CAUSALCMP_LOG` for per-module levels, e.g.
/// `CAUSALCMP_LOG=causalcmp_graph::transform=debug,causalcmp_compare=info`.
/// Falls back to `causalcmp=info` when unset or invalid.
///
/// Idempotent: later calls are no-ops, and an already installed global
/// subscriber is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("causalcmp=info"));

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
