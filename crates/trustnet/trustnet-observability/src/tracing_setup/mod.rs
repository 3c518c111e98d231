//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use trustnet_core::config::ObservabilityConfig;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `TRUSTNET_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Initialize tracing from config. `TRUSTNET_LOG` still wins when set.
///
/// Returns false if a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env("TRUSTNET_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);
    let installed = if config.json_logs {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    };
    if installed {
        tracing::info!(version = trustnet_core::constants::VERSION, "tracing initialized");
    }
    installed
}
