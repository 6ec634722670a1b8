use crate::error::{JpdataError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => JpdataError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => JpdataError::from(e),
        })?;
    }
    Ok(())
}

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    Ok(())
}
