// src/interception/exports.rs
//! Exported entry points
//!
//! These carry the exact names and C signatures of the genuine functions so
//! that, once this library is preloaded, the host's calls bind here first.
//! Each one hands off to the process-scoped dispatcher. A panic inside the
//! shim is caught and turned into a null return; it never unwinds into the
//! host.

#![allow(non_snake_case)]

use crate::interception::query::{EGLDisplay, EGLint, GLenum, GLubyte, GLuint};
use crate::runtime::state::shim;
use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

fn guarded<T>(call: impl FnOnce() -> *const T) -> *const T {
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or(ptr::null())
}

/// Intercepted `glGetString`
///
/// # Safety
///
/// Same contract as the genuine `glGetString`.
#[no_mangle]
pub unsafe extern "C" fn glGetString(name: GLenum) -> *const GLubyte {
    guarded(|| unsafe { shim().get_string(name) })
}

/// Intercepted `glGetStringi`
///
/// # Safety
///
/// Same contract as the genuine `glGetStringi`.
#[no_mangle]
pub unsafe extern "C" fn glGetStringi(name: GLenum, index: GLuint) -> *const GLubyte {
    guarded(|| unsafe { shim().get_stringi(name, index) })
}

/// Intercepted `eglQueryString`
///
/// # Safety
///
/// Same contract as the genuine `eglQueryString`.
#[no_mangle]
pub unsafe extern "C" fn eglQueryString(dpy: EGLDisplay, name: EGLint) -> *const c_char {
    guarded(|| unsafe { shim().query_string(dpy, name) })
}
