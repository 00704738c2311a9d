// src/identity/store.rs
//! Override store
//!
//! Holds the identity record handed to callers. The record is built at most
//! once per store, on the first `ensure_loaded`, and is never rebuilt.
//! Concurrent first callers wait on the same initialization and all see
//! the same finished record.

use crate::identity::loader::load_overrides;
use crate::identity::record::{IdentityRecord, IdentitySlot};
use crate::utils::errors::ShimError;
use once_cell::sync::OnceCell;
use std::ffi::CStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Override store
pub struct OverrideStore {
    /// Override file; `None` means defaults only
    source: Option<PathBuf>,

    /// Record, filled once
    record: OnceCell<IdentityRecord>,
}

impl OverrideStore {
    /// Create a store backed by the override file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(path.into()),
            record: OnceCell::new(),
        }
    }

    /// Create a store that never reads a file
    pub fn with_defaults() -> Self {
        Self {
            source: None,
            record: OnceCell::new(),
        }
    }

    /// Override file backing this store
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Load the override file if that has not happened yet
    pub fn ensure_loaded(&self) -> &IdentityRecord {
        self.record.get_or_init(|| self.load())
    }

    /// Whether the record has been built
    pub fn is_loaded(&self) -> bool {
        self.record.get().is_some()
    }

    /// Visible value of a slot
    pub fn get(&self, slot: IdentitySlot) -> &str {
        self.ensure_loaded().get(slot)
    }

    /// Visible value of a slot, NUL-terminated and valid for the store's lifetime
    pub fn get_cstr(&self, slot: IdentitySlot) -> &CStr {
        self.ensure_loaded().get_cstr(slot)
    }

    fn load(&self) -> IdentityRecord {
        let Some(path) = self.source.as_deref() else {
            return IdentityRecord::defaults();
        };

        match load_overrides(path) {
            Ok(overrides) => IdentityRecord::from_overrides(&overrides),
            Err(ShimError::ConfigUnavailable { path, .. }) => {
                info!("No config file at {}, using defaults", path.display());
                IdentityRecord::defaults()
            }
            Err(e) => {
                warn!("Config load failed, using defaults: {}", e);
                IdentityRecord::defaults()
            }
        }
    }
}

impl Default for OverrideStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}
