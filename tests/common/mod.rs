// tests/common/mod.rs
//! Shared fixtures: fake genuine GL/EGL functions and config files

#![allow(dead_code)]

use gl_identity_shim::interception::query::{
    EGLDisplay, EGLint, GLenum, GLubyte, GLuint, EGL_VERSION, GL_EXTENSIONS,
};
use gl_identity_shim::FunctionTable;
use std::ffi::CStr;
use std::io::Write;
use std::os::raw::{c_char, c_void};
use tempfile::NamedTempFile;

pub const GENUINE: &str = "genuine";
pub const GENUINE_EXTENSIONS: &str = "GL_EXT_debug_marker GL_OES_EGL_image";
pub const GENUINE_INDEXED: &str = "GL_OES_EGL_image";
pub const GENUINE_EGL_VERSION: &str = "1.5 Android META-EGL";
pub const GENUINE_EGL: &str = "genuine-egl";

unsafe extern "C" fn fake_get_string(name: GLenum) -> *const GLubyte {
    match name {
        GL_EXTENSIONS => c"GL_EXT_debug_marker GL_OES_EGL_image".as_ptr().cast(),
        _ => c"genuine".as_ptr().cast(),
    }
}

unsafe extern "C" fn fake_get_stringi(_name: GLenum, _index: GLuint) -> *const GLubyte {
    c"GL_OES_EGL_image".as_ptr().cast()
}

unsafe extern "C" fn fake_query_string(_display: EGLDisplay, name: EGLint) -> *const c_char {
    match name {
        EGL_VERSION => c"1.5 Android META-EGL".as_ptr(),
        _ => c"genuine-egl".as_ptr(),
    }
}

/// Resolver exposing all three fake genuine functions
pub fn genuine_table() -> FunctionTable {
    FunctionTable::new()
        .with(c"glGetString", fake_get_string as *const c_void)
        .with(c"glGetStringi", fake_get_stringi as *const c_void)
        .with(c"eglQueryString", fake_query_string as *const c_void)
}

/// Temporary override file with `contents`
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Read a returned string; panics on null
pub fn text<T>(ptr: *const T) -> String {
    assert!(!ptr.is_null(), "expected a string, got null");
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}
