use std::path::Path;

use anyhow::{Context, Result};

use gobuild_lib::{BuildContext, DirBuildConfig};

use crate::output::{print_info, print_json, print_stat, symbols};

pub fn cmd_info(cfg_dir: &Path, json: bool) -> Result<()> {
  let ctx = BuildContext::load(&DirBuildConfig::new(cfg_dir)).context("Failed to load build context")?;

  if json {
    return print_json(&ctx);
  }

  print_info(&format!("{} {} {}", ctx.project.name, symbols::ARROW, ctx.project.repository));
  for (label, path) in [
    ("Config", &ctx.cfg_dir),
    ("Workspace", &ctx.workspace),
    ("GOPATH", &ctx.go_path),
    ("GOROOT", &ctx.go_root),
    ("Build path", &ctx.build_path),
    ("Toolchain", &ctx.toolchain_archive),
    ("Launch script", &ctx.launch_script),
    ("Output", &ctx.out_dir),
  ] {
    print_stat(label, &path.display().to_string());
  }
  print_stat("Artifacts", &ctx.project.artifacts.join(", "));

  Ok(())
}
