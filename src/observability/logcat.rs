// src/observability/logcat.rs
//! `MakeWriter` that hands each formatted event to the platform log
//!
//! One writer is created per event. It buffers the formatted line and
//! emits it when dropped. Write failures are ignored.

use std::ffi::{CStr, CString};
use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

#[cfg(target_os = "android")]
#[link(name = "log")]
extern "C" {
    fn __android_log_write(
        prio: std::os::raw::c_int,
        tag: *const std::os::raw::c_char,
        text: *const std::os::raw::c_char,
    ) -> std::os::raw::c_int;
}

/// Android log priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Priority {
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
}

impl From<&Level> for Priority {
    fn from(level: &Level) -> Self {
        if *level == Level::ERROR {
            Priority::Error
        } else if *level == Level::WARN {
            Priority::Warn
        } else if *level == Level::INFO {
            Priority::Info
        } else {
            Priority::Debug
        }
    }
}

/// Platform log sink
#[derive(Debug, Clone)]
pub struct Logcat {
    tag: CString,
}

impl Logcat {
    /// Create a sink tagging every line with `tag`
    pub fn new(tag: &str) -> Self {
        let tag = tag.split('\0').next().unwrap_or_default();
        Self {
            tag: CString::new(tag).unwrap_or_default(),
        }
    }

    /// Tag attached to every line
    pub fn tag(&self) -> &CStr {
        &self.tag
    }
}

impl<'a> MakeWriter<'a> for Logcat {
    type Writer = LogcatLine<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LogcatLine::new(&self.tag, Priority::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LogcatLine::new(&self.tag, Priority::from(meta.level()))
    }
}

/// A single buffered log line
pub struct LogcatLine<'a> {
    tag: &'a CStr,
    priority: Priority,
    buf: Vec<u8>,
}

impl<'a> LogcatLine<'a> {
    fn new(tag: &'a CStr, priority: Priority) -> Self {
        Self {
            tag,
            priority,
            buf: Vec::with_capacity(128),
        }
    }

    /// Priority this line will be logged at
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Buffered text without its trailing newline; `None` if blank
    fn message(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buf);
        let text = text.trim_end_matches(['\n', '\r']).replace('\0', " ");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    #[cfg(target_os = "android")]
    fn emit(&self, message: String) {
        let Ok(text) = CString::new(message) else {
            return;
        };
        // SAFETY: both pointers are valid NUL-terminated strings for the call
        unsafe {
            __android_log_write(self.priority as i32, self.tag.as_ptr(), text.as_ptr());
        }
    }

    #[cfg(not(target_os = "android"))]
    fn emit(&self, message: String) {
        let line = format!("{}: {}\n", self.tag.to_string_lossy(), message);
        let _ = io::stderr().write_all(line.as_bytes());
    }
}

impl Write for LogcatLine<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LogcatLine<'_> {
    fn drop(&mut self) {
        if let Some(message) = self.message() {
            self.emit(message);
        }
    }
}
