// src/interception/resolver.rs
//! Resolution of the genuine functions behind each interception
//!
//! A [`SymbolResolver`] knows how to find a function by name. A
//! [`SymbolSlot`] asks it exactly once and caches the outcome for the rest
//! of the process: either a typed function pointer or a terminal failure.
//!
//! Two resolvers are provided:
//!
//! - [`NextObject`]: `dlsym(RTLD_NEXT, ..)`, which searches the objects
//!   loaded after this one and so never finds the shim's own exports
//! - [`FunctionTable`]: addresses injected explicitly by the embedder

use crate::interception::query::{EGLDisplay, EGLint, GLenum, GLubyte, GLuint};
use crate::utils::errors::{Result, ShimError};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_void};
use std::ptr::NonNull;
use tracing::{debug, warn};

/// `glGetString`
pub type GlGetStringFn = unsafe extern "C" fn(GLenum) -> *const GLubyte;

/// `glGetStringi`
pub type GlGetStringiFn = unsafe extern "C" fn(GLenum, GLuint) -> *const GLubyte;

/// `eglQueryString`
pub type EglQueryStringFn = unsafe extern "C" fn(EGLDisplay, EGLint) -> *const c_char;

/// A function pointer type a resolved address can be turned into
pub trait GenuineFn: Copy + Send + Sync + 'static {
    /// Reinterpret a resolved address as this function type
    ///
    /// # Safety
    ///
    /// `ptr` must be the address of a function with exactly this signature.
    unsafe fn from_raw(ptr: NonNull<c_void>) -> Self;
}

macro_rules! genuine_fn {
    ($($fn_type:ty),* $(,)?) => {
        $(
            impl GenuineFn for $fn_type {
                unsafe fn from_raw(ptr: NonNull<c_void>) -> Self {
                    std::mem::transmute::<*mut c_void, $fn_type>(ptr.as_ptr())
                }
            }
        )*
    };
}

genuine_fn!(GlGetStringFn, GlGetStringiFn, EglQueryStringFn);

/// Strategy for locating a genuine function by name
pub trait SymbolResolver: Send + Sync {
    /// Find the address of `name`
    fn lookup(&self, name: &CStr) -> Result<NonNull<c_void>>;
}

/// Dynamic-loader lookup in the objects that follow this one
#[derive(Debug, Clone, Copy, Default)]
pub struct NextObject;

impl SymbolResolver for NextObject {
    fn lookup(&self, name: &CStr) -> Result<NonNull<c_void>> {
        // SAFETY: `name` is NUL-terminated and RTLD_NEXT is a valid pseudo-handle
        let ptr = unsafe { libc::dlsym(libc::RTLD_NEXT, name.as_ptr()) };
        NonNull::new(ptr)
            .ok_or_else(|| ShimError::SymbolUnavailable(name.to_string_lossy().into_owned()))
    }
}

/// Explicitly injected function addresses
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    entries: HashMap<CString, usize>,
}

impl FunctionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `addr` under `name`
    pub fn with(mut self, name: &CStr, addr: *const c_void) -> Self {
        self.entries.insert(name.to_owned(), addr as usize);
        self
    }

    /// Number of registered functions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SymbolResolver for FunctionTable {
    fn lookup(&self, name: &CStr) -> Result<NonNull<c_void>> {
        self.entries
            .get(name)
            .and_then(|&addr| NonNull::new(addr as *mut c_void))
            .ok_or_else(|| ShimError::SymbolUnavailable(name.to_string_lossy().into_owned()))
    }
}

/// Observable state of a [`SymbolSlot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolState {
    Unresolved,
    Resolved,
    Failed,
}

/// Once-resolved genuine function
pub struct SymbolSlot<F> {
    name: &'static CStr,
    state: OnceCell<Option<F>>,
}

impl<F: GenuineFn> SymbolSlot<F> {
    /// Create an unresolved slot for `name`
    ///
    /// # Safety
    ///
    /// Whatever any resolver returns for `name` must be a function of type `F`.
    pub const unsafe fn new(name: &'static CStr) -> Self {
        Self {
            name,
            state: OnceCell::new(),
        }
    }

    /// Symbol name
    pub fn name(&self) -> &'static CStr {
        self.name
    }

    /// Genuine function, looking it up on first use
    ///
    /// A failed lookup is final: later calls report the failure without
    /// asking the resolver again.
    pub fn resolve<R: SymbolResolver + ?Sized>(&self, resolver: &R) -> Result<F> {
        let resolved = self.state.get_or_init(|| match resolver.lookup(self.name) {
            Ok(ptr) => {
                debug!("Resolved real {} at {:p}", self.name.to_string_lossy(), ptr);
                // SAFETY: guaranteed by the contract of `SymbolSlot::new`
                Some(unsafe { F::from_raw(ptr) })
            }
            Err(e) => {
                warn!("Failed to find real {}! ({})", self.name.to_string_lossy(), e);
                None
            }
        });

        (*resolved)
            .ok_or_else(|| ShimError::SymbolUnavailable(self.name.to_string_lossy().into_owned()))
    }

    /// Current resolution state
    pub fn state(&self) -> SymbolState {
        match self.state.get() {
            None => SymbolState::Unresolved,
            Some(Some(_)) => SymbolState::Resolved,
            Some(None) => SymbolState::Failed,
        }
    }
}
