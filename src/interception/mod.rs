// src/interception/mod.rs
//! Graphics identity interception
//!
//! - **Query**: GL/EGL identifiers and their owned/unowned classification
//! - **Resolver**: once-only lookup of the genuine functions
//! - **Dispatcher**: per-identifier override/pass-through policy
//! - **Exports**: `glGetString`, `glGetStringi`, `eglQueryString`
//!
//! # Architecture
//!
//! ```text
//! Host process
//!     │
//!     ├─ glGetString(name) ──▶ Dispatcher ──┬─ owned ───▶ OverrideStore
//!     │                                     └─ unowned ─▶ genuine glGetString
//!     ├─ glGetStringi(name, i) ──▶ genuine glGetStringi
//!     └─ eglQueryString(dpy, name) ──▶ Dispatcher ──┬─ EGL_VENDOR ──▶ OverrideStore
//!                                                   └─ other ───────▶ genuine eglQueryString
//! ```

pub mod dispatcher;
pub mod exports;
pub mod query;
pub mod resolver;

// Re-export commonly used types
pub use dispatcher::Dispatcher;
pub use query::{EglStringQuery, GlStringQuery};
pub use resolver::{FunctionTable, NextObject, SymbolResolver, SymbolSlot, SymbolState};
