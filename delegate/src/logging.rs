//! Tracing setup for the delegator.
//!
//! The filter is a fixed directive and `RUST_LOG` is not read: stderr is
//! shared with the runtime and carries at most the one diagnostic line.
//! All delegator events are `debug`, below the fixed level.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level applied regardless of the environment.
pub const FILTER_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber with [`FILTER_DIRECTIVE`].
pub fn init() {
    tracing_subscriber::registry()
        .with(EnvFilter::new(FILTER_DIRECTIVE))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
