// src/runtime/mod.rs
//! Shim lifecycle
//!
//! - **State**: the process configuration and dispatcher
//! - **Startup**: load-time hook that configures the dispatcher, announces
//!   the shim and loads overrides
//!
//! # Lifecycle
//!
//! ```text
//! dlopen / LD_PRELOAD ──▶ startup(config) ──▶ configure ──▶ override file read once
//!                                                              │
//! host queries ──▶ shim() ──▶ Dispatcher ◀─────────────────────┘   (no reload, no teardown)
//! ```

pub mod startup;
pub mod state;

// Re-export commonly used types
pub use startup::{prepare, startup};
pub use state::{configure, shim};
