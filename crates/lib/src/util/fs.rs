//! Filesystem helpers shared by the pipeline steps.

use std::fs;
use std::path::Path;

use crate::error::BuildError;

/// Set `mode` on `path`. A no-op on platforms without Unix permissions.
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<(), BuildError> {
  use std::os::unix::fs::PermissionsExt;

  fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(|e| BuildError::SetPermissions {
    path: path.to_path_buf(),
    source: e,
  })
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) -> Result<(), BuildError> {
  Ok(())
}

/// Create `path` and any missing parents, failing if `path` itself already exists.
pub fn create_fresh_dir(path: &Path) -> Result<(), BuildError> {
  if path.exists() {
    return Err(BuildError::PathExists {
      path: path.to_path_buf(),
    });
  }
  fs::create_dir_all(path).map_err(|e| BuildError::CreateDir {
    path: path.to_path_buf(),
    source: e,
  })
}
