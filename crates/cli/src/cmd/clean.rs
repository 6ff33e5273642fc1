use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use gobuild_lib::{DirBuildConfig, Orchestrator};

use crate::output::print_success;

pub fn cmd_clean(cfg_dir: &Path) -> Result<()> {
  let orchestrator = Orchestrator::new(&DirBuildConfig::new(cfg_dir)).context("Failed to load build context")?;

  debug!(workspace = %orchestrator.context().workspace.display(), "cleaning");
  orchestrator.clean_workspace().context("Failed to clean workspace")?;

  print_success(&format!(
    "Cleaned {}",
    orchestrator.context().workspace.display()
  ));
  Ok(())
}
