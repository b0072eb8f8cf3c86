//! Opt-in `tracing` setup for hosts embedding the chart.
//!
//! Window changes are reported at `debug`, per-event navigation decisions
//! (ignored pans, zoom limits, drag steps) at `trace`.

/// Default filter directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "kline_chart=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host has
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller supplied fallback
/// directive, e.g. `"kline_chart=trace"` while debugging drag behavior.
#[must_use]
pub fn init_tracing(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}

#[cfg(all(test, not(feature = "telemetry")))]
mod tests {
    #[test]
    fn tracing_setup_is_a_no_op_without_the_feature() {
        assert!(!super::init_default_tracing());
    }
}
