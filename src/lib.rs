// src/lib.rs
//! GL Identity Shim
//!
//! A preloadable library that answers graphics identity queries
//! (`glGetString` vendor, renderer, version and GLSL version, plus
//! `eglQueryString` vendor) from a configurable override table, and
//! forwards every other query to the genuine driver functions.
//!
//! # Architecture
//!
//! - **identity**: identity record, override file loader, override store
//! - **interception**: symbol resolution, per-query dispatch, C exports
//! - **runtime**: process-scoped state and the load-time hook
//! - **observability**: tracing subscriber writing to the platform log
//! - **utils**: configuration constants and error types
//!
//! # Override file
//!
//! `/data/local/tmp/gl_spoof.conf`, one `key=value` per line, with keys
//! `gl_vendor`, `gl_renderer`, `gl_version` and `gl_glsl_version`. Missing
//! keys, or a missing file, leave the compiled-in defaults in place.

// Public module exports
pub mod identity;
pub mod interception;
pub mod observability;
pub mod runtime;
pub mod utils;

// Re-export commonly used types
pub use identity::{IdentityRecord, IdentitySlot, OverrideStore};
pub use interception::{Dispatcher, FunctionTable, NextObject, SymbolResolver};
pub use runtime::shim;
pub use utils::config::ShimConfig;
pub use utils::errors::{Result, ShimError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Shim build information
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub rustc_version: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            version: VERSION,
            git_hash: GIT_HASH,
            build_timestamp: env!("BUILD_TIMESTAMP"),
            rustc_version: env!("RUSTC_VERSION"),
        }
    }
}
