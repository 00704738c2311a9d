// src/utils/mod.rs
//! Common utilities shared by the shim
//!
//! - **config**: well-known paths, log tag and filter defaults
//! - **errors**: crate error type

pub mod config;
pub mod errors;

pub use config::ShimConfig;
pub use errors::{Result, ShimError};
