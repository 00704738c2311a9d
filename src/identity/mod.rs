// src/identity/mod.rs
//! Spoofed identity
//!
//! - **Record**: the four identity slots and their compiled-in defaults
//! - **Loader**: best-effort parser for the `key=value` override file
//! - **Store**: once-loaded record handed out to the dispatcher
//!
//! # Resolution
//!
//! ```text
//! override file ──parse──▶ ConfigOverrides ──┐
//!                                            ├──▶ IdentityRecord (per slot: config if non-empty, else default)
//! compiled-in defaults ──────────────────────┘
//! ```

pub mod loader;
pub mod record;
pub mod store;

// Re-export commonly used types
pub use loader::{load_overrides, parse_overrides};
pub use record::{ConfigOverrides, IdentityRecord, IdentitySlot};
pub use store::OverrideStore;
