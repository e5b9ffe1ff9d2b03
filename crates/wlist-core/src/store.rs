//! Reading and writing wordlist files
//!
//! Files are flat JSON objects, written with 4-space indentation and a
//! trailing newline. Writes go to a temporary file next to the target and
//! are renamed into place, so an interrupted write never truncates the
//! previous contents.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::wordlist::Wordlist;
use crate::{Error, Result};

const INDENT: &[u8] = b"    ";

/// Load a wordlist from a JSON file
///
/// # Errors
/// `FileNotFound` if `path` does not exist, `Io` for other read failures,
/// `ParseError` if the content is not a flat word → number object.
pub fn load(path: &Path) -> Result<Wordlist> {
    let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let list = from_json(&text).map_err(|e| Error::parse(path, e))?;
    debug!(path = %path.display(), entries = list.len(), "loaded wordlist");
    Ok(list)
}

/// Parse a wordlist from JSON text
pub fn from_json(text: &str) -> serde_json::Result<Wordlist> {
    serde_json::from_str(text)
}

/// Serialize to the canonical on-disk form
pub fn to_pretty_json(list: &Wordlist) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    list.serialize(&mut ser).map_err(|e| Error::SerializeError {
        what: "wordlist".into(),
        message: e.to_string(),
    })?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| Error::SerializeError {
        what: "wordlist".into(),
        message: e.to_string(),
    })
}

/// Write a wordlist to `path`, replacing any existing file atomically
///
/// An existing file keeps its permissions.
///
/// # Errors
/// `WriteError` if the temporary file cannot be created in the target
/// directory, written, or renamed over `path`.
pub fn save(path: &Path, list: &Wordlist) -> Result<()> {
    let text = to_pretty_json(list)?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::write(path, e))?;
    temp.write_all(text.as_bytes())
        .and_then(|_| temp.flush())
        .map_err(|e| Error::write(path, e))?;
    if let Ok(meta) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| Error::write(path, e))?;
    }
    temp.persist(path).map_err(|e| Error::write(path, e.error))?;

    debug!(path = %path.display(), entries = list.len(), "saved wordlist");
    Ok(())
}
