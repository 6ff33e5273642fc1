//! Implementation of the `gobuild script` command.
//!
//! Prints the launch script without writing it or touching the workspace.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use gobuild_lib::pipeline::script::render_launch_script;
use gobuild_lib::pipeline::source::read_version;
use gobuild_lib::{BuildContext, DirBuildConfig, Version};

/// Execute the script command.
///
/// Uses `version` when given, otherwise the first line of `VERSION`.
pub fn cmd_script(cfg_dir: &Path, version: Option<&str>) -> Result<()> {
  let ctx = BuildContext::load(&DirBuildConfig::new(cfg_dir)).context("Failed to load build context")?;

  let version = match version {
    Some(v) => Version::parse(v).ok_or_else(|| anyhow!("Version must not be empty"))?,
    None => read_version(&ctx.version_file)?,
  };

  print!("{}", render_launch_script(&ctx, &version));
  Ok(())
}
