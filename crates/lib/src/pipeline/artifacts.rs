//! Artifact collection.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::consts::WORLD_ACCESSIBLE_MODE;
use crate::context::BuildContext;
use crate::error::BuildError;
use crate::util::fs::set_mode;

/// Copy every configured artifact from the checkout into the output
/// directory, open up permissions on the output directory's entries, then
/// move the process back to the parent of the configuration directory.
///
/// Returns the paths of the copied artifacts in configuration order.
pub fn collect_artifacts(ctx: &BuildContext) -> Result<Vec<PathBuf>, BuildError> {
  fs::create_dir_all(&ctx.out_dir).map_err(|e| BuildError::CreateDir {
    path: ctx.out_dir.clone(),
    source: e,
  })?;

  let mut collected = Vec::with_capacity(ctx.project.artifacts.len());
  for (name, from, to) in ctx.artifact_paths() {
    if !from.is_file() {
      return Err(BuildError::MissingArtifact {
        name: name.to_string(),
        path: from,
      });
    }

    fs::copy(&from, &to).map_err(|e| BuildError::Copy {
      from: from.clone(),
      to: to.clone(),
      source: e,
    })?;
    debug!(artifact = name, dest = %to.display(), "copied artifact");
    collected.push(to);
  }

  open_permissions(&ctx.out_dir)?;

  let return_dir = ctx.return_dir();
  std::env::set_current_dir(return_dir).map_err(|e| BuildError::ChangeDir {
    path: return_dir.to_path_buf(),
    source: e,
  })?;

  info!(count = collected.len(), out = %ctx.out_dir.display(), "collected artifacts");
  Ok(collected)
}

/// Make every direct entry of `dir` readable, writable and executable by everyone.
fn open_permissions(dir: &Path) -> Result<(), BuildError> {
  for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
    let entry = entry.map_err(|e| BuildError::ReadFile {
      path: dir.to_path_buf(),
      source: e.into(),
    })?;
    set_mode(entry.path(), WORLD_ACCESSIBLE_MODE)?;
  }
  Ok(())
}
