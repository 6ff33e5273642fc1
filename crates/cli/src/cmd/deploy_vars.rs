use std::path::Path;

use anyhow::{Context, Result};

use gobuild_lib::{BuildPlugin, DirBuildConfig, Orchestrator};

use crate::output::print_json;

pub fn cmd_deploy_vars(cfg_dir: &Path, json: bool) -> Result<()> {
  let orchestrator = Orchestrator::new(&DirBuildConfig::new(cfg_dir)).context("Failed to load build context")?;
  let vars = orchestrator.deploy_variables();

  if json {
    return print_json(&vars);
  }

  for (key, value) in &vars {
    println!("{key}={value}");
  }
  Ok(())
}
