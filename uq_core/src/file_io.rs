//! # File I/O Module
//!
//! Reads and writes configuration documents.
//!
//! - **Atomic saves**: write to `<name>.tmp`, sync, rename over the target so
//!   an interrupted save never leaves a half-written configuration. Symlinks
//!   are written through; a directory that refuses the temp file falls back
//!   to overwriting an existing file in place
//! - **Lenient loads**: malformed JSON becomes an empty document plus a
//!   warning, matching how the main window treats unreadable content
//! - **Strict loads**: for tooling that must reject malformed files
//!
//! ## Example
//!
//! ```rust,no_run
//! use uq_core::file_io::{read_document, write_document};
//! use uq_core::panels::PanelSet;
//! use std::path::Path;
//!
//! let panels = PanelSet::new();
//! let path = Path::new("workflow.json");
//!
//! write_document(&panels.to_document()?, path)?;
//! let parsed = read_document(path)?;
//! assert!(parsed.warning.is_none());
//! # Ok::<(), uq_core::errors::UqError>(())
//! ```

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::document::{Document, ParsedDocument};
use crate::errors::{UqError, UqResult};

/// Write a document to `path` with atomic write semantics.
///
/// 1. Serialize to pretty JSON
/// 2. Write to a sibling temporary file
/// 3. Sync to disk
/// 4. Rename over `path`
///
/// A symlinked `path` is resolved first, so the link survives and its target
/// receives the new content. If the temporary file cannot be created (e.g. a
/// read-only directory) but `path` already exists, the file is overwritten in
/// place instead; that fallback is not atomic.
pub fn write_document(doc: &Document, path: &Path) -> UqResult<()> {
    let json = doc.to_json_string()?;
    let target = resolve_target(path);
    let tmp_path = tmp_path_for(&target);

    match File::create(&tmp_path) {
        Ok(tmp_file) => replace_with(tmp_file, &tmp_path, &target, json.as_bytes())?,
        Err(e) if target.is_file() => {
            warn!(
                "cannot create {} ({}); overwriting {} in place",
                tmp_path.display(),
                e,
                target.display()
            );
            write_in_place(&target, json.as_bytes())?;
        }
        Err(e) => {
            return Err(UqError::file_error(
                "create temp file",
                tmp_path.display().to_string(),
                e.to_string(),
            ))
        }
    }

    debug!("wrote {} bytes to {}", json.len(), target.display());
    Ok(())
}

fn replace_with(mut tmp_file: File, tmp_path: &Path, target: &Path, bytes: &[u8]) -> UqResult<()> {
    tmp_file.write_all(bytes).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        UqError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        UqError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    fs::rename(tmp_path, target).map_err(|e| {
        let _ = fs::remove_file(tmp_path);
        UqError::file_error("rename to final", target.display().to_string(), e.to_string())
    })
}

fn write_in_place(target: &Path, bytes: &[u8]) -> UqResult<()> {
    let mut file = File::create(target)
        .map_err(|e| UqError::file_error("open", target.display().to_string(), e.to_string()))?;
    file.write_all(bytes)
        .and_then(|()| file.sync_all())
        .map_err(|e| UqError::file_error("write", target.display().to_string(), e.to_string()))
}

/// Follow a symlink to the file it points at; other paths are returned as-is
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

/// Read a document, treating unparseable content as an empty object.
///
/// # Returns
///
/// * `Ok(ParsedDocument)` - File was read; `warning` is set if the content
///   was discarded
/// * `Err(UqError::FileError)` - File could not be opened or read
pub fn read_document(path: &Path) -> UqResult<ParsedDocument> {
    let contents = read_bytes(path)?;
    let parsed = Document::parse_lenient_bytes(&contents);
    if let Some(warning) = &parsed.warning {
        warn!("{}: {}; treating as empty", path.display(), warning);
    }
    Ok(parsed)
}

/// Read a document, failing on malformed JSON.
pub fn read_document_strict(path: &Path) -> UqResult<Document> {
    let contents = read_bytes(path)?;
    let text = std::str::from_utf8(&contents).map_err(|e| {
        UqError::serialization(format!("{} is not valid UTF-8: {}", path.display(), e))
    })?;
    Document::parse_strict(text).map_err(|e| {
        UqError::serialization(format!("Invalid JSON in {}: {}", path.display(), e.reason()))
    })
}

fn read_bytes(path: &Path) -> UqResult<Vec<u8>> {
    let mut file = File::open(path)
        .map_err(|e| UqError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| UqError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// `a/b/config.json` -> `a/b/config.json.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("untitled.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_document() -> Document {
        let mut doc = Document::new();
        doc.insert_section("edps", json!([{"name": "Disp_1_1"}])).unwrap();
        doc
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/path/to/workflow.json")),
            Path::new("/path/to/workflow.json.tmp")
        );
        assert_eq!(
            tmp_path_for(Path::new("noext")),
            Path::new("noext.tmp")
        );
    }

    #[test]
    fn test_write_and_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.json");

        write_document(&sample_document(), &path).unwrap();
        let parsed = read_document(&path).unwrap();

        assert!(parsed.warning.is_none());
        assert_eq!(parsed.document, sample_document());
    }

    #[test]
    fn test_atomic_write_leaves_no_tmp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atomic.json");

        write_document(&sample_document(), &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink_keeps_link() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("link.json");
        fs::write(&real, "{}").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_document(&sample_document(), &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(read_document(&real).unwrap().document, sample_document());
        assert!(!tmp_path_for(&real).exists());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("a.json");

        let err = write_document(&sample_document(), &path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = read_document(&dir.path().join("missing.json")).unwrap_err();
        match err {
            UqError::FileError { operation, .. } => assert_eq!(operation, "open"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_lenient_and_strict_reads_of_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        fs::write(&path, "this is not json").unwrap();

        let parsed = read_document(&path).unwrap();
        assert!(parsed.document.is_empty());
        assert!(parsed.warning.is_some());

        let err = read_document_strict(&path).unwrap_err();
        assert!(err.to_string().contains("garbage.json"));
    }

    #[test]
    fn test_invalid_utf8_reads_as_empty_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();

        let parsed = read_document(&path).unwrap();
        assert!(parsed.document.is_empty());
        assert!(parsed.warning.unwrap().contains("not valid UTF-8"));

        let err = read_document_strict(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
