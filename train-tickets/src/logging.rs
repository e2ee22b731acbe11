//! Logging setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// Logs go to stderr so stdout carries only the table. `RUST_LOG` takes
/// precedence; otherwise the crate logs at `warn`, or `debug` when verbose.
pub fn init(verbose: bool) {
    let default = if verbose {
        "train_tickets=debug,warn"
    } else {
        "train_tickets=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
