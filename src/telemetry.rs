//! Telemetry helpers for applications embedding `axis-rs`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! [`init_default_tracing`] once at startup or install their own `tracing`
//! subscriber and filters before painting axes.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter is taken from `RUST_LOG` when set, and falls back to `info`
/// for this crate only so host logs stay quiet by default.
///
/// Returns `true` when initialization succeeds, `false` when the feature is
/// disabled or another global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("axis_rs=info"));

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
