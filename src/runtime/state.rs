// src/runtime/state.rs
//! Process-scoped shim state
//!
//! One dispatcher per process, created on first touch and never torn down.
//! Its store and symbol slots fill themselves lazily, each at most once.
//! The dispatcher is built from the process configuration, which is fixed
//! by the first `configure` call or, failing that, by the first touch.

use crate::interception::dispatcher::Dispatcher;
use crate::interception::resolver::NextObject;
use crate::utils::config::ShimConfig;
use once_cell::sync::{Lazy, OnceCell};

static CONFIG: OnceCell<ShimConfig> = OnceCell::new();

static SHIM: Lazy<Dispatcher<NextObject>> =
    Lazy::new(|| Dispatcher::from_config(config(), NextObject));

/// Fix the process configuration
///
/// Returns `false` if a configuration was already in place; it is kept.
pub fn configure(config: ShimConfig) -> bool {
    CONFIG.set(config).is_ok()
}

/// The process configuration, `ShimConfig::default()` unless configured
pub fn config() -> &'static ShimConfig {
    CONFIG.get_or_init(ShimConfig::default)
}

/// The process-wide dispatcher behind the exported entry points
pub fn shim() -> &'static Dispatcher<NextObject> {
    &SHIM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shim_is_singleton() {
        assert!(std::ptr::eq(shim(), shim()));
    }

    #[test]
    fn test_shim_reads_configured_path() {
        let source = shim().store().source().unwrap();
        assert_eq!(source, config().config_path.as_path());
    }

    #[test]
    fn test_configuration_is_fixed_once_shim_exists() {
        let before = shim().store().source().unwrap().to_path_buf();

        assert!(!configure(ShimConfig::default().with_config_path("/tmp/late.conf")));
        assert_eq!(config().config_path, before);
        assert_eq!(shim().store().source().unwrap(), before.as_path());
    }
}
