// src/identity/record.rs
//! Identity record: the four spoofable GL identity strings

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ffi::{CStr, CString};

/// Default `GL_VENDOR`
pub const DEFAULT_VENDOR: &str = "Qualcomm";

/// Default `GL_RENDERER`
pub const DEFAULT_RENDERER: &str = "Adreno (TM) 660";

/// Default `GL_VERSION`
pub const DEFAULT_VERSION: &str =
    "OpenGL ES 3.2 V@0615.73 (GIT@d93af58fcd, Ie67da92a76, 1683932973) (Date:05/12/23)";

/// Default `GL_SHADING_LANGUAGE_VERSION`
pub const DEFAULT_GLSL_VERSION: &str = "OpenGL ES GLSL ES 3.20";

/// A spoofable identity attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentitySlot {
    Vendor,
    Renderer,
    Version,
    ShadingLanguageVersion,
}

impl IdentitySlot {
    /// Every slot, in record order
    pub const ALL: [IdentitySlot; 4] = [
        IdentitySlot::Vendor,
        IdentitySlot::Renderer,
        IdentitySlot::Version,
        IdentitySlot::ShadingLanguageVersion,
    ];

    /// Key naming this slot in the override file
    pub fn config_key(&self) -> &'static str {
        match self {
            IdentitySlot::Vendor => "gl_vendor",
            IdentitySlot::Renderer => "gl_renderer",
            IdentitySlot::Version => "gl_version",
            IdentitySlot::ShadingLanguageVersion => "gl_glsl_version",
        }
    }

    /// Map an override file key back to its slot; unknown keys yield `None`
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key {
            "gl_vendor" => Some(IdentitySlot::Vendor),
            "gl_renderer" => Some(IdentitySlot::Renderer),
            "gl_version" => Some(IdentitySlot::Version),
            "gl_glsl_version" => Some(IdentitySlot::ShadingLanguageVersion),
            _ => None,
        }
    }

    /// Name of the GL enum this slot answers for
    pub fn gl_name(&self) -> &'static str {
        match self {
            IdentitySlot::Vendor => "GL_VENDOR",
            IdentitySlot::Renderer => "GL_RENDERER",
            IdentitySlot::Version => "GL_VERSION",
            IdentitySlot::ShadingLanguageVersion => "GL_SHADING_LANGUAGE_VERSION",
        }
    }

    /// Compiled-in value for this slot
    pub fn default_value(&self) -> &'static str {
        match self {
            IdentitySlot::Vendor => DEFAULT_VENDOR,
            IdentitySlot::Renderer => DEFAULT_RENDERER,
            IdentitySlot::Version => DEFAULT_VERSION,
            IdentitySlot::ShadingLanguageVersion => DEFAULT_GLSL_VERSION,
        }
    }

    fn index(&self) -> usize {
        match self {
            IdentitySlot::Vendor => 0,
            IdentitySlot::Renderer => 1,
            IdentitySlot::Version => 2,
            IdentitySlot::ShadingLanguageVersion => 3,
        }
    }
}

/// Raw per-slot values read from the override file
///
/// Values are the file's bytes, not necessarily UTF-8. An empty value is
/// kept as-is; it only disappears when the record is built, where it falls
/// back to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    values: [Option<Vec<u8>>; 4],
}

impl ConfigOverrides {
    /// Overrides with no slot set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slot, replacing any earlier value
    pub fn set(&mut self, slot: IdentitySlot, value: impl Into<Vec<u8>>) {
        self.values[slot.index()] = Some(value.into());
    }

    /// Value set for a slot, if any
    pub fn get(&self, slot: IdentitySlot) -> Option<&[u8]> {
        self.values[slot.index()].as_deref()
    }
}

/// One slot's value: exact bytes for callers, lossy text for logs
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    text: String,
    c_text: CString,
}

impl Entry {
    /// Build an entry, or `None` if nothing usable remains before a NUL
    fn new(value: &[u8]) -> Option<Self> {
        let value = value.split(|&b| b == 0).next().unwrap_or_default();
        if value.is_empty() {
            return None;
        }
        let c_text = CString::new(value).ok()?;
        Some(Self {
            text: String::from_utf8_lossy(value).into_owned(),
            c_text,
        })
    }

    fn fallback(slot: IdentitySlot) -> Self {
        let text = slot.default_value();
        Self {
            text: text.to_string(),
            // Defaults are NUL-free literals
            c_text: CString::new(text).unwrap_or_default(),
        }
    }
}

/// The identity visible to callers: one non-empty string per slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    entries: [Entry; 4],
}

impl IdentityRecord {
    /// Record made only of compiled-in defaults
    pub fn defaults() -> Self {
        Self::from_overrides(&ConfigOverrides::default())
    }

    /// Record taking each configured non-empty value, defaults elsewhere
    pub fn from_overrides(overrides: &ConfigOverrides) -> Self {
        let entries = IdentitySlot::ALL.map(|slot| {
            overrides
                .get(slot)
                .and_then(Entry::new)
                .unwrap_or_else(|| Entry::fallback(slot))
        });
        Self { entries }
    }

    /// Visible value of a slot, with invalid UTF-8 replaced
    pub fn get(&self, slot: IdentitySlot) -> &str {
        &self.entries[slot.index()].text
    }

    /// Visible value of a slot as a NUL-terminated string, bytes as configured
    pub fn get_cstr(&self, slot: IdentitySlot) -> &CStr {
        &self.entries[slot.index()].c_text
    }
}

impl Default for IdentityRecord {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Serialize for IdentityRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IdentityRecord", 4)?;
        state.serialize_field("gl_vendor", self.get(IdentitySlot::Vendor))?;
        state.serialize_field("gl_renderer", self.get(IdentitySlot::Renderer))?;
        state.serialize_field("gl_version", self.get(IdentitySlot::Version))?;
        state.serialize_field(
            "gl_glsl_version",
            self.get(IdentitySlot::ShadingLanguageVersion),
        )?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let record = IdentityRecord::defaults();
        assert_eq!(record.get(IdentitySlot::Vendor), "Qualcomm");
        assert_eq!(record.get(IdentitySlot::Renderer), "Adreno (TM) 660");
        assert_eq!(
            record.get(IdentitySlot::ShadingLanguageVersion),
            "OpenGL ES GLSL ES 3.20"
        );
        assert!(record.get(IdentitySlot::Version).starts_with("OpenGL ES 3.2 V@0615.73"));
    }

    #[test]
    fn test_config_key_mapping() {
        for slot in IdentitySlot::ALL {
            assert_eq!(IdentitySlot::from_config_key(slot.config_key()), Some(slot));
        }
        assert_eq!(IdentitySlot::from_config_key("gl_bogus"), None);
        assert_eq!(IdentitySlot::from_config_key("GL_VENDOR"), None);
        assert_eq!(IdentitySlot::from_config_key(""), None);
    }

    #[test]
    fn test_override_applied() {
        let mut overrides = ConfigOverrides::new();
        overrides.set(IdentitySlot::Renderer, "Mali-G78");

        let record = IdentityRecord::from_overrides(&overrides);
        assert_eq!(record.get(IdentitySlot::Renderer), "Mali-G78");
        assert_eq!(record.get_cstr(IdentitySlot::Renderer).to_bytes(), b"Mali-G78");
        assert_eq!(record.get(IdentitySlot::Vendor), DEFAULT_VENDOR);
    }

    #[test]
    fn test_non_utf8_bytes_preserved() {
        let mut overrides = ConfigOverrides::new();
        overrides.set(IdentitySlot::Renderer, b"Adreno\xff\xfe".as_slice());

        let record = IdentityRecord::from_overrides(&overrides);
        assert_eq!(
            record.get_cstr(IdentitySlot::Renderer).to_bytes(),
            b"Adreno\xff\xfe"
        );
        assert_eq!(record.get(IdentitySlot::Renderer), "Adreno\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_empty_override_falls_back() {
        let mut overrides = ConfigOverrides::new();
        overrides.set(IdentitySlot::Vendor, "");

        let record = IdentityRecord::from_overrides(&overrides);
        assert_eq!(record.get(IdentitySlot::Vendor), DEFAULT_VENDOR);
    }

    #[test]
    fn test_interior_nul_terminates_value() {
        let mut overrides = ConfigOverrides::new();
        overrides.set(IdentitySlot::Vendor, "ARM\0junk");
        overrides.set(IdentitySlot::Renderer, "\0junk");

        let record = IdentityRecord::from_overrides(&overrides);
        assert_eq!(record.get(IdentitySlot::Vendor), "ARM");
        assert_eq!(record.get(IdentitySlot::Renderer), DEFAULT_RENDERER);
    }

    #[test]
    fn test_cstr_matches_text() {
        let record = IdentityRecord::defaults();
        for slot in IdentitySlot::ALL {
            assert_eq!(record.get_cstr(slot).to_str().unwrap(), record.get(slot));
        }
    }

    #[test]
    fn test_serialize_keys() {
        let json = serde_json::to_value(IdentityRecord::defaults()).unwrap();
        assert_eq!(json["gl_vendor"], "Qualcomm");
        assert_eq!(json["gl_renderer"], "Adreno (TM) 660");
        assert!(json.get("gl_glsl_version").is_some());
    }
}
