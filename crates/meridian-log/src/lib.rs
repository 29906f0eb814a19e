//! Structured logging for the overlay toolkit.
//!
//! Provides filterable logging via the `tracing` ecosystem: console output
//! with module paths and an uptime timer, filtered by `RUST_LOG` or a
//! settings-supplied level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Filter precedence: the `RUST_LOG` environment variable wins, then
/// `level_override` (e.g. from CLI flags or settings), then `"info"`.
///
/// Call once at startup; a second call would fail to set the global
/// subscriber and is a programming error.
pub fn init_logging(level_override: Option<&str>) {
    let fallback = level_override.unwrap_or("info");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_info() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_level_strings_parse() {
        for level in ["error", "warn", "info", "debug", "trace", "warn,meridian_overlay=debug"] {
            assert!(
                EnvFilter::try_new(level).is_ok(),
                "failed to parse filter: {level}"
            );
        }
    }
}
