// src/interception/query.rs
//! Query identifiers for the intercepted string functions
//!
//! Every identifier handed to an intercepted function is classified into a
//! small tagged enumeration. Owned identifiers map to an override policy;
//! anything else lands in an explicit `Unowned` arm and is passed through.

use crate::identity::record::IdentitySlot;
use std::os::raw::{c_int, c_uint, c_void};

/// `GLenum`
pub type GLenum = c_uint;

/// `GLuint`
pub type GLuint = c_uint;

/// `GLubyte`
pub type GLubyte = u8;

/// `EGLint`
pub type EGLint = c_int;

/// `EGLDisplay`
pub type EGLDisplay = *mut c_void;

pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;

pub const EGL_VENDOR: EGLint = 0x3053;
pub const EGL_VERSION: EGLint = 0x3054;
pub const EGL_EXTENSIONS: EGLint = 0x3055;
pub const EGL_CLIENT_APIS: EGLint = 0x308D;

/// Classified `glGetString` identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlStringQuery {
    /// Answered from the override store
    Owned(IdentitySlot),

    /// Forwarded to the genuine implementation
    Unowned(GLenum),
}

impl From<GLenum> for GlStringQuery {
    fn from(name: GLenum) -> Self {
        match name {
            GL_VENDOR => GlStringQuery::Owned(IdentitySlot::Vendor),
            GL_RENDERER => GlStringQuery::Owned(IdentitySlot::Renderer),
            GL_VERSION => GlStringQuery::Owned(IdentitySlot::Version),
            GL_SHADING_LANGUAGE_VERSION => {
                GlStringQuery::Owned(IdentitySlot::ShadingLanguageVersion)
            }
            other => GlStringQuery::Unowned(other),
        }
    }
}

/// Classified `eglQueryString` identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EglStringQuery {
    /// `EGL_VENDOR`, answered from the vendor slot
    Vendor,

    /// `EGL_VERSION`, forwarded and logged
    Version,

    /// Forwarded silently
    Unowned(EGLint),
}

impl From<EGLint> for EglStringQuery {
    fn from(name: EGLint) -> Self {
        match name {
            EGL_VENDOR => EglStringQuery::Vendor,
            EGL_VERSION => EglStringQuery::Version,
            other => EglStringQuery::Unowned(other),
        }
    }
}
