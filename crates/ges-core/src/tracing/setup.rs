//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the GES tracing/logging system.
///
/// Reads `GES_LOG` for per-crate log levels.
/// Format: `GES_LOG=ges_search=debug,ges_score=warn`
///
/// Falls back to `ges=info` if `GES_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    install(DEFAULT_LOG_FILTER);
}

/// Like [`init_tracing`], but an unset `GES_LOG` falls back to the filter
/// for a CLI verbosity count (`-v` = debug, `-vv` = trace).
pub fn init_tracing_with_verbosity(verbosity: u8) {
    install(verbosity_filter(verbosity));
}

/// Filter directive for a verbosity count.
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_FILTER,
        1 => "ges=debug",
        _ => "ges=trace",
    }
}

fn install(fallback: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        // A host application may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(verbosity_filter(0), "ges=info");
        assert_eq!(verbosity_filter(1), "ges=debug");
        assert_eq!(verbosity_filter(7), "ges=trace");
    }
}
