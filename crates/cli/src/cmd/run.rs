//! Implementation of the `gobuild run` command.
//!
//! Runs the whole pipeline for the configuration directory and prints what
//! was collected.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use gobuild_lib::{BuildPlugin, DirBuildConfig, Orchestrator};

use crate::output::{format_duration, print_stat, print_success};

/// Execute the run command.
///
/// Cleans and recreates the workspace, checks out the project, extracts the
/// toolchain, runs the downstream build and copies the artifacts to the
/// output directory.
pub fn cmd_run(cfg_dir: &Path) -> Result<()> {
  let started = Instant::now();
  let orchestrator = Orchestrator::new(&DirBuildConfig::new(cfg_dir)).context("Failed to load build context")?;
  debug!(cfg_dir = %orchestrator.context().cfg_dir.display(), "resolved configuration directory");

  let outcome = orchestrator.run().context("Build failed")?;

  println!();
  print_success(&format!(
    "Built {} {}",
    orchestrator.context().project.name,
    outcome.version
  ));
  print_stat("Output", &orchestrator.context().out_dir.display().to_string());
  for artifact in &outcome.artifacts {
    let name = artifact.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    print_stat("Artifact", &name);
  }
  print_stat("Duration", &format_duration(started.elapsed()));

  Ok(())
}
