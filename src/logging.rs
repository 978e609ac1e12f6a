//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout only ever carries display output. `RUST_LOG`
//! overrides the configured level:
//!
//! ```bash
//! RUST_LOG=calcpad=debug calcpad --keys "5+3="
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Install the global subscriber. Only the first call has any effect.
pub fn init(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init();
    });
}
