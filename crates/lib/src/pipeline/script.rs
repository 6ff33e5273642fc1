//! Launch script generation.
//!
//! The launch script exports the Go environment and hands over to the
//! downstream project's own `build.sh`. Its content depends only on the
//! context and the version, so it can be compared byte for byte.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::consts::{DOWNSTREAM_ENTRY, WORLD_ACCESSIBLE_MODE};
use crate::context::BuildContext;
use crate::error::BuildError;
use crate::pipeline::source::Version;
use crate::util::fs::set_mode;

const SHEBANG: &str = "#!/bin/bash -e";

/// Render the launch script for `ctx` and `version`.
///
/// Exported values are double-quoted so paths containing spaces survive.
pub fn render_launch_script(ctx: &BuildContext, version: &Version) -> String {
  let exports = [
    ("GOPATH", ctx.go_path.display().to_string()),
    ("GOROOT", ctx.go_root.display().to_string()),
    ("PATH", format!("$PATH:{}", ctx.bin_path.display())),
    ("BUILD_PATH", ctx.build_path.display().to_string()),
  ];

  let mut lines = vec![SHEBANG.to_string()];
  lines.extend(exports.iter().map(|(name, value)| format!("export {name}={value:?}")));
  lines.extend(exports.iter().map(|(name, _)| format!("echo \"{name} ==> ${name}\"")));
  lines.push("cd \"$BUILD_PATH\"".to_string());
  lines.push(format!("{DOWNSTREAM_ENTRY} {version}"));

  let mut script = lines.join("\n");
  script.push('\n');
  script
}

/// Write the launch script next to the configuration and make it executable for everyone.
pub fn write_launch_script(ctx: &BuildContext, version: &Version) -> Result<PathBuf, BuildError> {
  let path = ctx.launch_script.clone();
  info!(path = %path.display(), version = %version, "generating launch script");

  fs::write(&path, render_launch_script(ctx, version)).map_err(|e| BuildError::WriteFile {
    path: path.clone(),
    source: e,
  })?;
  set_mode(&path, WORLD_ACCESSIBLE_MODE)?;

  Ok(path)
}
