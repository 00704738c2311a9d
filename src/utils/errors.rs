// src/utils/errors.rs
//! Error types for the shim
//!
//! None of these ever cross the exported entry points; callers of the
//! intercepted functions only ever observe a value or a null pointer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Shim error
#[derive(Debug, Error)]
pub enum ShimError {
    /// The genuine implementation could not be found in the process
    #[error("Symbol unavailable: {0}")]
    SymbolUnavailable(String),

    /// The configuration source could not be opened
    #[error("Config unavailable at {}: {source}", .path.display())]
    ConfigUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log sink could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ShimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_unavailable_display() {
        let err = ShimError::SymbolUnavailable("glGetString".to_string());
        assert_eq!(err.to_string(), "Symbol unavailable: glGetString");
    }

    #[test]
    fn test_config_unavailable_keeps_source() {
        let err = ShimError::ConfigUnavailable {
            path: PathBuf::from("/nonexistent/gl_spoof.conf"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nonexistent/gl_spoof.conf"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
