//! Tracing initialization.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber with sensible defaults.
///
/// - Respects `RUST_LOG` if set, falls back to `info`
/// - Uses `try_init` so repeated calls (e.g. across tests) are harmless
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(env_filter).with_target(false).try_init();
}
