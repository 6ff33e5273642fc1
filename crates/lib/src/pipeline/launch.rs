//! Launch script execution.

use std::path::Path;
use std::process::Command;

use tracing::{debug, error, info};

use crate::error::BuildError;

/// Run the launch script and wait for it.
///
/// Output goes straight to the caller's stdout and stderr. A non-zero exit
/// status is reported as `DownstreamBuildFailed` rather than being left for
/// artifact collection to trip over.
pub fn run_launch_script(script: &Path) -> Result<(), BuildError> {
  info!(path = %script.display(), "running launch script");

  let status = Command::new(script).status().map_err(|e| BuildError::Spawn {
    path: script.to_path_buf(),
    source: e,
  })?;

  if !status.success() {
    error!(path = %script.display(), code = ?status.code(), "downstream build failed");
    return Err(BuildError::DownstreamBuildFailed {
      script: script.to_path_buf(),
      code: status.code(),
    });
  }

  debug!(path = %script.display(), "launch script finished");
  Ok(())
}
