//! Workspace cleanup and creation.

use std::fs;

use tracing::{debug, info};

use crate::context::BuildContext;
use crate::error::BuildError;
use crate::util::fs::create_fresh_dir;

/// Remove the workspace left over from a previous build.
///
/// A missing workspace is not an error.
pub fn clean_workspace(ctx: &BuildContext) -> Result<(), BuildError> {
  if !ctx.workspace.is_dir() {
    debug!(path = %ctx.workspace.display(), "no workspace to clean");
    return Ok(());
  }

  info!(path = %ctx.workspace.display(), "cleaning workspace");
  fs::remove_dir_all(&ctx.workspace).map_err(|e| BuildError::RemoveDir {
    path: ctx.workspace.clone(),
    source: e,
  })?;
  info!(path = %ctx.workspace.display(), "cleaned workspace");

  Ok(())
}

/// Create the workspace root, `GOPATH`, the checkout directory and the
/// toolchain install directory.
///
/// Each directory must not exist yet; `clean_workspace` is expected to have run.
pub fn create_workspace(ctx: &BuildContext) -> Result<(), BuildError> {
  info!("creating workspace directories");

  for (label, path) in [
    ("workspace", &ctx.workspace),
    ("go path", &ctx.go_path),
    ("build path", &ctx.build_path),
    ("install directory", &ctx.install_dir),
  ] {
    debug!(what = label, path = %path.display(), "creating directory");
    create_fresh_dir(path)?;
  }

  Ok(())
}
