extern crate tempfile;
extern crate tokio;

use crate::error::{io_error, Result};
use std::{io::Write, path::Path};
use tempfile::NamedTempFile;
use tokio::task::spawn_blocking;

fn is_invalid(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*') || c.is_ascii_control()
}

/// Makes `name` usable as a single path component on every platform.
pub fn normalize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_invalid(c) { '_' } else { c })
        .collect()
}

pub async fn create_dir(path: &Path) -> Result<()> {
    if tokio::fs::metadata(path).await.is_ok() {
        return Ok(());
    }
    log::trace!("Create {}", path.display());
    tokio::fs::create_dir_all(path)
        .await
        .map_err(io_error(path))
}

pub async fn exists(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}

fn write_blocking(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir).map_err(io_error(dir))?;
    file.write_all(contents).map_err(io_error(file.path()))?;
    file.as_file().sync_all().map_err(io_error(file.path()))?;
    file.persist_noclobber(path)
        .map_err(|e| io_error(path)(e.error))?;
    Ok(())
}

/// Writes `contents` to `path` through a temporary file in the same
/// directory, so `path` never holds a partial write. Fails if `path` exists.
pub async fn write_atomic(path: &Path, contents: Vec<u8>) -> Result<()> {
    let owned = path.to_path_buf();
    match spawn_blocking(move || write_blocking(&owned, &contents)).await {
        Ok(ret) => ret,
        Err(e) => Err(io_error(path)(std::io::Error::new(
            std::io::ErrorKind::Other,
            e,
        ))),
    }
}
