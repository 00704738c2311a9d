// src/identity/loader.rs
//! Override file loader
//!
//! The override file is a plain `key=value` list. Parsing is best effort:
//! every line that does not look like a known `key=value` pair is dropped
//! and parsing carries on with the next one. Values are kept as raw bytes.
//!
//! ```text
//! # comments and blank lines are ignored
//! gl_vendor=Qualcomm
//! gl_renderer=Adreno (TM) 660
//! gl_version=OpenGL ES 3.2 V@...
//! gl_glsl_version=OpenGL ES GLSL ES 3.20
//! ```
//!
//! Reading is bounded: at most `MAX_CONFIG_BYTES` are read in total, and a
//! line keeps at most `MAX_VALUE_LEN` bytes. The rest of a longer line is
//! skipped without being buffered.

use crate::identity::record::{ConfigOverrides, IdentitySlot};
use crate::utils::config::{MAX_CONFIG_BYTES, MAX_LINE, MAX_VALUE_LEN};
use crate::utils::errors::{Result, ShimError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Open and parse the override file at `path`
///
/// Fails only when the file cannot be opened. A read error partway through
/// keeps whatever was parsed before it.
pub fn load_overrides(path: &Path) -> Result<ConfigOverrides> {
    let file = File::open(path).map_err(|source| ShimError::ConfigUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_overrides(BufReader::new(file)))
}

/// Parse override lines from any buffered reader
pub fn parse_overrides<R: BufRead>(reader: R) -> ConfigOverrides {
    BoundedLines::new(reader.take(MAX_CONFIG_BYTES))
        .map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                warn!("Config read error, keeping values parsed so far: {}", e);
                None
            }
        })
        .filter_map(|line| parse_line(&line))
        .fold(ConfigOverrides::new(), |mut overrides, (slot, value)| {
            info!(
                "Config: {} = {}",
                slot.config_key(),
                String::from_utf8_lossy(&value)
            );
            overrides.set(slot, value);
            overrides
        })
}

/// Turn one raw line into a recognized `(slot, value)` pair
pub fn parse_line(line: &[u8]) -> Option<(IdentitySlot, Vec<u8>)> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    if line.is_empty() || line.starts_with(b"#") {
        return None;
    }

    let split = line.iter().position(|&b| b == b'=')?;
    let (key, value) = (&line[..split], &line[split + 1..]);
    let slot = std::str::from_utf8(key)
        .ok()
        .and_then(IdentitySlot::from_config_key)?;

    Some((slot, bounded(value).to_vec()))
}

/// Cut a value at its first NUL and at `MAX_VALUE_LEN` bytes
fn bounded(value: &[u8]) -> &[u8] {
    let value = value.split(|&b| b == 0).next().unwrap_or_default();
    &value[..value.len().min(MAX_VALUE_LEN)]
}

/// Physical lines of a reader, each at most `MAX_LINE` bytes
struct BoundedLines<R> {
    reader: R,
}

impl<R: BufRead> BoundedLines<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let read = self
            .reader
            .by_ref()
            .take(MAX_LINE as u64)
            .read_until(b'\n', &mut line)?;

        if read == 0 {
            return Ok(None);
        }
        if read == MAX_LINE && !line.ends_with(b"\n") {
            line.truncate(MAX_VALUE_LEN);
            self.skip_rest_of_line()?;
        }
        Ok(Some(line))
    }

    /// Consume up to and including the next newline, keeping nothing
    fn skip_rest_of_line(&mut self) -> io::Result<()> {
        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(end) => {
                    self.reader.consume(end + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for BoundedLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
