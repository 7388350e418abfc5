//! Tracing setup for the terminal client.

use crate::config::ChatOptions;

/// Initializes tracing on stderr so stdout carries only chat entries.
///
/// `RUST_LOG` wins when set; otherwise [`ChatOptions::log_filter`].
/// Safe to call more than once: later calls are ignored.
pub fn init_tracing(options: &ChatOptions) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(options.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(options.verbose)
        .try_init();
}
