use crate::error::{PostError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write `data` to `path` only if nothing exists there yet.
///
/// Uses an exclusive create, so the existence check and the creation are a
/// single filesystem call. The file gets the usual umask-derived mode.
/// A file left half-written by a failed write is removed.
pub fn write_new(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::AlreadyExists {
                PostError::AlreadyExists(path.to_path_buf())
            } else {
                PostError::Io(e)
            }
        })?;
    if let Err(e) = file.write_all(data).and_then(|()| file.sync_all()) {
        drop(file);
        let _ = std::fs::remove_file(path);
        return Err(e.into());
    }
    Ok(())
}
