// src/runtime/startup.rs
//! Load-time hook
//!
//! Runs once when the library is mapped into the host, before the host
//! gets a chance to query anything.

use crate::identity::record::{DEFAULT_RENDERER, DEFAULT_VENDOR};
use crate::interception::dispatcher::Dispatcher;
use crate::interception::resolver::{NextObject, SymbolResolver};
use crate::observability::init_tracing;
use crate::runtime::state::{self, configure, shim};
use crate::utils::config::ShimConfig;
use crate::BuildInfo;
use ctor::ctor;
use tracing::{debug, info, warn};

#[ctor]
fn on_load() {
    startup(&ShimConfig::default());
}

/// Configure the process dispatcher from `config`, announce the shim and
/// load the override file eagerly
///
/// The first configuration wins. A later call with a different override
/// file is logged and otherwise ignored.
pub fn startup(config: &ShimConfig) -> &'static Dispatcher<NextObject> {
    // The host may already own the global subscriber
    let _ = init_tracing(config);

    if !configure(config.clone()) {
        let active = &state::config().config_path;
        if *active != config.config_path {
            warn!(
                "Shim already configured with {}, ignoring {}",
                active.display(),
                config.config_path.display()
            );
        }
    }

    let dispatcher = shim();
    prepare(dispatcher);
    dispatcher
}

/// Announce the shim and build `dispatcher`'s identity record
pub fn prepare<R: SymbolResolver>(dispatcher: &Dispatcher<R>) {
    let build = BuildInfo::current();
    info!("GL Spoof library loaded (LD_PRELOAD) v{} ({})", build.version, build.git_hash);
    info!("Target: {} / {}", DEFAULT_VENDOR, DEFAULT_RENDERER);

    let record = dispatcher.store().ensure_loaded();
    match serde_json::to_string(record) {
        Ok(json) => debug!("Effective identity: {}", json),
        Err(e) => debug!("Effective identity not printable: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::record::IdentitySlot;
    use crate::interception::resolver::FunctionTable;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_startup_loads_store() {
        let dispatcher = startup(&ShimConfig::default());
        assert!(std::ptr::eq(dispatcher, shim()));
        assert!(shim().store().is_loaded());
    }

    #[test]
    fn test_startup_is_repeatable() {
        startup(&ShimConfig::default());
        let first = shim().store().ensure_loaded().clone();
        startup(&ShimConfig::default());
        assert_eq!(shim().store().ensure_loaded(), &first);
    }

    #[test]
    fn test_late_startup_keeps_first_configuration() {
        let before = startup(&ShimConfig::default()).store().source().unwrap().to_path_buf();

        let dispatcher = startup(&ShimConfig::default().with_config_path("/tmp/late.conf"));
        assert_eq!(dispatcher.store().source().unwrap(), before.as_path());
    }

    #[test]
    fn test_prepare_uses_configured_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "gl_vendor=FromCustomPath").unwrap();
        file.flush().unwrap();

        let config = ShimConfig::default().with_config_path(file.path());
        let dispatcher = Dispatcher::from_config(&config, FunctionTable::new());
        prepare(&dispatcher);

        let store = dispatcher.store();
        assert!(store.is_loaded());
        assert_eq!(store.source(), Some(file.path()));
        assert_eq!(store.get(IdentitySlot::Vendor), "FromCustomPath");
        assert_eq!(store.get(IdentitySlot::Renderer), DEFAULT_RENDERER);
    }
}
