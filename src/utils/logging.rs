// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for binaries and demos
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies
/// (e.g. `"roman_converter=debug"`). Calling this twice is a no-op.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init();
}
