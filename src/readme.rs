use crate::error::{Result, SyncError};
use std::fs;
use std::io::Write;
use std::path::Path;

pub const START_MARKER: &str = "<!-- CONTRIBUTORS_START -->";
pub const END_MARKER: &str = "<!-- CONTRIBUTORS_END -->";

/// Replace everything between the markers with `table`.
///
/// The markers and all bytes outside them are kept as-is. The first
/// occurrence of each marker is used.
pub fn splice(document: &str, table: &str) -> Result<String> {
    let (start, end) = match (document.find(START_MARKER), document.find(END_MARKER)) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(SyncError::MarkersNotFound {
                start: START_MARKER,
                end: END_MARKER,
            })
        }
    };

    if end <= start {
        return Err(SyncError::MarkersOutOfOrder {
            start: START_MARKER,
            end: END_MARKER,
        });
    }

    let before = &document[..start + START_MARKER.len()];
    let after = &document[end..];

    Ok(format!("{}\n{}\n{}", before, table, after))
}

/// Read the target document, failing if it does not exist
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(SyncError::DocumentNotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Replace `path` with `content` via a temp file in the same directory.
///
/// The rename is the only step that touches `path`; on any failure the
/// temp file is removed and `path` keeps its old content.
pub fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| SyncError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".readme_tmp_")
        .suffix(".md")
        .tempfile_in(dir)
        .map_err(write_err)?;

    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Temp files are created 0600; keep the document's own mode
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
