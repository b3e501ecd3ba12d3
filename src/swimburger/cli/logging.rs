//! Diagnostics.
//!
//! Events go to stderr without ANSI codes, so stdout carries nothing but the rendered output.
//! The filter comes from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (e.g. under a test harness); keep that one.
    let _ = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
