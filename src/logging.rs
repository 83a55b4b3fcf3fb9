use std::io;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the `tracing` subscriber. Events go to stderr; `RUST_LOG` overrides the `info` default.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(io::stderr));
        // A subscriber may already be installed by a test harness.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
