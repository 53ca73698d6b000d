//! Logging setup.

use crate::settings::BridgeSettings;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber. `RUST_LOG` wins over `directive`.
///
/// Returns false if a global subscriber was already installed, which keeps
/// repeated calls (tests, embedding hosts) harmless.
pub fn init(directive: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

pub fn init_from_settings(settings: &BridgeSettings) -> bool {
    init(&settings.log_filter)
}
