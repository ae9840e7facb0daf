//! Shared helpers for the integration tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call from every test. Enable with
/// `RUST_LOG=tessel_parse=debug` or `RUST_LOG=tessel_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(filter)
                .init();
        }
    });
}
