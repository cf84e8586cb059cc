use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::convert;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read a comment source file
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an HTML fragment, creating parent directories as needed
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    let write_err = |source| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, html).map_err(write_err)
}

/// Convert `src` and write the fragment to `dest`
pub fn convert_file(src: &Path, dest: &Path, context_id: &str) -> Result<(), IoError> {
    let raw = read_source(src)?;
    let html = convert(&raw, context_id);
    log::debug!(
        "converted {} ({} bytes) -> {}",
        src.display(),
        raw.len(),
        dest.display()
    );
    write_html(dest, &html)
}
