//! Reading input snapshots and writing output artifacts.
//!
//! Each utility performs exactly one read and at most one write, so these are
//! plain blocking calls.

use std::path::Path;

use crate::error::ExtractError;

/// Reads a saved document as text. Invalid UTF-8 sequences are replaced with
/// U+FFFD instead of failing the whole run.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the file cannot be read.
pub fn read_document(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), "input is not valid UTF-8; decoding lossily");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Writes `contents` to `path` verbatim, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the file cannot be written.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ExtractError> {
    std::fs::write(path, contents).map_err(|e| ExtractError::io(path, e))
}

/// Like [`write_artifact`] but creates missing parent directories first.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] naming the parent directory if it cannot be
/// created, or naming `path` if the file cannot be written.
pub fn write_artifact_creating_dirs(path: &Path, contents: &str) -> Result<(), ExtractError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExtractError::io(parent, e))?;
    }
    write_artifact(path, contents)
}
