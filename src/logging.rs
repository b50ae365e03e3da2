//! Tracing setup for the denops-test CLI.
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the binary (or the test suite embedding the library).

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set. Otherwise `debug` selects `denops_test=debug`
/// and the default is `denops_test=warn`.
pub fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if debug {
                EnvFilter::try_new("denops_test=debug,warn")
            } else {
                EnvFilter::try_new("denops_test=warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init()
}
