//! Build context: every path the pipeline touches, derived once from the
//! configuration directory.
//!
//! # Layout
//!
//! ```text
//! <cfg>/VERSION                       version of the downstream project
//! <cfg>/build.sh                      generated launch script
//! <cfg>/../gen/go-workspace/
//!   go-path/src/<repo-path>/          checkout of the downstream project
//!   go-install-dir/go/                extracted toolchain (GOROOT)
//! <cfg>/../gen/out/                   collected artifacts
//! ```

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::consts::{
  GEN_DIR, GO_PATH_DIR, GO_ROOT_DIR, INSTALL_DIR, LAUNCH_SCRIPT, OUT_DIR, VERSION_FILE, WORKSPACE_DIR,
};
use crate::error::BuildError;

/// Configuration handed to a build plugin by whatever invokes it.
pub trait BuildConfig {
  /// Directory holding `VERSION`, the optional `build.toml` and the generated launch script.
  fn cfg_dir(&self) -> &Path;
}

/// A `BuildConfig` that is nothing more than a directory.
#[derive(Debug, Clone)]
pub struct DirBuildConfig {
  cfg_dir: PathBuf,
}

impl DirBuildConfig {
  pub fn new(cfg_dir: impl Into<PathBuf>) -> Self {
    Self { cfg_dir: cfg_dir.into() }
  }
}

impl BuildConfig for DirBuildConfig {
  fn cfg_dir(&self) -> &Path {
    &self.cfg_dir
  }
}

/// Immutable paths and project identity for one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildContext {
  pub cfg_dir: PathBuf,
  pub workspace: PathBuf,
  pub go_path: PathBuf,
  pub install_dir: PathBuf,
  pub go_root: PathBuf,
  /// Entry appended to `PATH` in the launch script.
  pub bin_path: PathBuf,
  /// Checkout location of the downstream project, inside `go_path`.
  pub build_path: PathBuf,
  pub version_file: PathBuf,
  pub toolchain_archive: PathBuf,
  pub launch_script: PathBuf,
  pub out_dir: PathBuf,
  pub project: ProjectConfig,
}

impl BuildContext {
  /// Derive every path from an already resolved configuration directory.
  ///
  /// This does not touch the filesystem.
  pub fn from_parts(cfg_dir: PathBuf, project: ProjectConfig) -> Self {
    let gen_dir = cfg_dir.parent().unwrap_or(&cfg_dir).join(GEN_DIR);
    let workspace = gen_dir.join(WORKSPACE_DIR);
    let go_path = workspace.join(GO_PATH_DIR);
    let install_dir = workspace.join(INSTALL_DIR);
    let go_root = install_dir.join(GO_ROOT_DIR);
    let bin_path = go_root.join("bin");
    let build_path = go_path.join("src").join(repo_path(&project.repository));
    let toolchain_archive = build_path.join(&project.toolchain_archive);

    Self {
      version_file: cfg_dir.join(VERSION_FILE),
      launch_script: cfg_dir.join(LAUNCH_SCRIPT),
      out_dir: gen_dir.join(OUT_DIR),
      cfg_dir,
      workspace,
      go_path,
      install_dir,
      go_root,
      bin_path,
      build_path,
      toolchain_archive,
      project,
    }
  }

  /// Resolve the configuration directory to an absolute path, load its
  /// `build.toml` and derive the context.
  ///
  /// The directory is made absolute up front because the pipeline changes
  /// the process working directory when it finishes.
  pub fn load(config: &impl BuildConfig) -> Result<Self, BuildError> {
    let cfg_dir = resolve_dir(config.cfg_dir())?;
    let project = ProjectConfig::load(&cfg_dir)?;
    Ok(Self::from_parts(cfg_dir, project))
  }

  /// Directory the process returns to after collecting artifacts.
  pub fn return_dir(&self) -> &Path {
    self.cfg_dir.parent().unwrap_or(&self.cfg_dir)
  }

  /// Destination of each configured artifact, paired with its name.
  pub fn artifact_paths(&self) -> impl Iterator<Item = (&str, PathBuf, PathBuf)> {
    self
      .project
      .artifacts
      .iter()
      .map(|name| (name.as_str(), self.build_path.join(name), self.out_dir.join(name)))
  }
}

fn resolve_dir(path: &Path) -> Result<PathBuf, BuildError> {
  let resolved = if path.exists() {
    dunce::canonicalize(path)
  } else {
    std::path::absolute(path).map(|p| normalize_path(&p))
  };
  resolved.map_err(|e| BuildError::ResolveConfigDir {
    path: path.to_path_buf(),
    source: e,
  })
}

/// Resolve `.` and `..` without touching the filesystem. `..` never climbs above the root.
fn normalize_path(path: &Path) -> PathBuf {
  let mut components: Vec<Component> = Vec::new();

  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => match components.last().copied() {
        Some(Component::Normal(_)) => {
          components.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => components.push(component),
      },
      other => components.push(other),
    }
  }

  components.iter().collect()
}

/// Path of a repository below `GOPATH/src`: the URL without its scheme and
/// without anything from `.git` onwards, and never absolute.
///
/// `https://github.com/SAP/cf-mta-plugin.git` becomes `github.com/SAP/cf-mta-plugin`.
pub fn repo_path(url: &str) -> &str {
  let base = url.split_once(".git").map_or(url, |(head, _)| head);
  let base = base.split_once("//").map_or(base, |(_, rest)| rest);
  base.trim_matches('/')
}
