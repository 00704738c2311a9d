// src/utils/config.rs
//! Shim configuration
//!
//! The shim has no command line and no environment of its own to speak of,
//! so its configuration is a handful of well-known locations and names.
//! The identity overrides themselves live in the file at `config_path`.

use std::path::PathBuf;

/// Well-known location of the identity override file
pub const DEFAULT_CONFIG_PATH: &str = "/data/local/tmp/gl_spoof.conf";

/// Tag attached to every logcat line
pub const LOG_TAG: &str = "GLSpoof";

/// Environment variable holding a `tracing` filter directive
pub const LOG_FILTER_ENV: &str = "GL_SPOOF_LOG";

/// Filter used when `LOG_FILTER_ENV` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Size of a config line buffer, terminator included
pub const MAX_LINE: usize = 512;

/// Longest value kept from a config line; longer values are truncated
pub const MAX_VALUE_LEN: usize = MAX_LINE - 1;

/// Most bytes read from the override file; the rest is ignored
pub const MAX_CONFIG_BYTES: u64 = 64 * 1024;

/// Shim configuration
#[derive(Debug, Clone)]
pub struct ShimConfig {
    /// Identity override file
    pub config_path: PathBuf,

    /// Log tag
    pub log_tag: &'static str,

    /// Environment variable consulted for the log filter
    pub log_filter_env: &'static str,

    /// Fallback log filter
    pub default_log_filter: &'static str,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_tag: LOG_TAG,
            log_filter_env: LOG_FILTER_ENV,
            default_log_filter: DEFAULT_LOG_FILTER,
        }
    }
}

impl ShimConfig {
    /// Point the shim at a different override file
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }
}
