// src/interception/dispatcher.rs
//! Per-query dispatch for the intercepted string functions
//!
//! | Function         | Identifier                       | Policy                   |
//! |------------------|----------------------------------|--------------------------|
//! | `glGetString`    | vendor, renderer, version, GLSL  | override, logged         |
//! | `glGetString`    | anything else                    | pass-through             |
//! | `glGetStringi`   | everything                       | pass-through             |
//! | `eglQueryString` | `EGL_VENDOR`                     | override, logged         |
//! | `eglQueryString` | `EGL_VERSION`                    | pass-through, logged     |
//! | `eglQueryString` | anything else                    | pass-through             |
//!
//! If the genuine function cannot be resolved, the call returns null.

use crate::identity::record::IdentitySlot;
use crate::identity::store::OverrideStore;
use crate::interception::query::{
    EGLDisplay, EGLint, EglStringQuery, GLenum, GLubyte, GLuint, GlStringQuery,
};
use crate::interception::resolver::{
    EglQueryStringFn, GlGetStringFn, GlGetStringiFn, SymbolResolver, SymbolSlot, SymbolState,
};
use crate::utils::config::ShimConfig;
use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;
use tracing::info;

/// Query dispatcher for every intercepted function
///
/// Overridden values are borrowed from the dispatcher's store and stay
/// valid for as long as the dispatcher lives.
pub struct Dispatcher<R> {
    store: OverrideStore,
    resolver: R,
    gl_get_string: SymbolSlot<GlGetStringFn>,
    gl_get_stringi: SymbolSlot<GlGetStringiFn>,
    egl_query_string: SymbolSlot<EglQueryStringFn>,
}

impl<R: SymbolResolver> Dispatcher<R> {
    /// Create a dispatcher answering from `store` and forwarding through `resolver`
    pub fn new(store: OverrideStore, resolver: R) -> Self {
        // SAFETY: the slot names are the GL/EGL entry points whose
        // signatures the slot types spell out
        unsafe {
            Self {
                store,
                resolver,
                gl_get_string: SymbolSlot::new(c"glGetString"),
                gl_get_stringi: SymbolSlot::new(c"glGetStringi"),
                egl_query_string: SymbolSlot::new(c"eglQueryString"),
            }
        }
    }

    /// Create a dispatcher whose store reads the override file named by `config`
    pub fn from_config(config: &ShimConfig, resolver: R) -> Self {
        Self::new(OverrideStore::new(config.config_path.clone()), resolver)
    }

    /// Override store
    pub fn store(&self) -> &OverrideStore {
        &self.store
    }

    /// Resolution state of each intercepted function
    pub fn symbol_states(&self) -> [(&'static CStr, SymbolState); 3] {
        [
            (self.gl_get_string.name(), self.gl_get_string.state()),
            (self.gl_get_stringi.name(), self.gl_get_stringi.state()),
            (self.egl_query_string.name(), self.egl_query_string.state()),
        ]
    }

    /// `glGetString`
    ///
    /// # Safety
    ///
    /// Pass-through calls carry the genuine function's own requirements
    /// (a current GL context, for one).
    pub unsafe fn get_string(&self, name: GLenum) -> *const GLubyte {
        let Ok(real) = self.gl_get_string.resolve(&self.resolver) else {
            return ptr::null();
        };

        self.store.ensure_loaded();

        match GlStringQuery::from(name) {
            GlStringQuery::Owned(slot) => {
                let value = self.spoofed("glGetString", slot.gl_name(), slot);
                value.as_ptr().cast()
            }
            GlStringQuery::Unowned(name) => real(name),
        }
    }

    /// `glGetStringi`
    ///
    /// Indexed queries are only valid for extension enumeration, so they are
    /// never overridden, not even for the identifiers `glGetString` owns.
    ///
    /// # Safety
    ///
    /// Same as [`Dispatcher::get_string`].
    pub unsafe fn get_stringi(&self, name: GLenum, index: GLuint) -> *const GLubyte {
        let Ok(real) = self.gl_get_stringi.resolve(&self.resolver) else {
            return ptr::null();
        };

        real(name, index)
    }

    /// `eglQueryString`
    ///
    /// # Safety
    ///
    /// Same as [`Dispatcher::get_string`]; `display` is handed to the
    /// genuine function untouched.
    pub unsafe fn query_string(&self, display: EGLDisplay, name: EGLint) -> *const c_char {
        let Ok(real) = self.egl_query_string.resolve(&self.resolver) else {
            return ptr::null();
        };

        self.store.ensure_loaded();

        match EglStringQuery::from(name) {
            EglStringQuery::Vendor => {
                let value = self.spoofed("eglQueryString", "EGL_VENDOR", IdentitySlot::Vendor);
                value.as_ptr()
            }
            EglStringQuery::Version => {
                let value = real(display, name);
                let shown = if value.is_null() {
                    Cow::Borrowed("null")
                } else {
                    CStr::from_ptr(value).to_string_lossy()
                };
                info!("eglQueryString(EGL_VERSION) -> passthrough: {}", shown);
                value
            }
            EglStringQuery::Unowned(name) => real(display, name),
        }
    }

    fn spoofed(&self, function: &str, identifier: &str, slot: IdentitySlot) -> &CStr {
        info!("{}({}) -> spoofed: {}", function, identifier, self.store.get(slot));
        self.store.get_cstr(slot)
    }
}
