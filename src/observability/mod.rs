// src/observability/mod.rs
//! Logging for the shim
//!
//! Events go through `tracing` and are written by a `fmt` subscriber into
//! the platform log: logcat on Android, stderr elsewhere. Installing the
//! subscriber is best effort; if the host already has one, or installation
//! fails for any other reason, the shim keeps working without it.

pub mod logcat;

pub use logcat::{Logcat, Priority};

use crate::utils::config::ShimConfig;
use crate::utils::errors::{Result, ShimError};
use tracing_subscriber::EnvFilter;

/// Install the shim's log subscriber
pub fn init_tracing(config: &ShimConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(config.log_filter_env)
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Logcat::new(config.log_tag))
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| ShimError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_best_effort() {
        let config = ShimConfig::default();
        // A second install must fail quietly, never panic
        let _ = init_tracing(&config);
        let second = init_tracing(&config);
        assert!(matches!(second, Err(ShimError::Logging(_))));
    }
}
