//! Opt-in tracing setup for hosts embedding the viewport core.
//!
//! The library only emits `tracing` events (gesture starts, viewport
//! commits); it never installs a subscriber on its own. Hosts that already
//! run their own subscriber need nothing from this module.

/// Installs a compact stdout subscriber filtered by `RUST_LOG` (falling back
/// to `info`). Available with the `telemetry` feature.
///
/// Returns `true` when the subscriber was installed, `false` when the feature
/// is disabled or the host already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
