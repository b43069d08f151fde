/// Filesystem precondition checks for the format pipeline.
use std::fs;
use std::io;
use std::path::Path;

/// Check whether `path` exists and is a regular file.
///
/// Returns `Ok(false)` when the path is not found, and also when it exists
/// but is not a regular file (a directory, for instance) — callers report
/// both cases the same way.
///
/// # Errors
///
/// Propagates any stat error other than not-found.
pub fn file_exists(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Check whether `path` exists and is a directory.
///
/// Returns `Ok(false)` when the path is not found, or when it exists but is
/// a file.
///
/// # Errors
///
/// Propagates any stat error other than not-found.
pub fn dir_exists(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
