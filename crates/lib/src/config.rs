//! Project configuration.
//!
//! The defaults describe the MTA plugin for the Cloud Foundry CLI. A
//! `build.toml` in the configuration directory may override any field:
//!
//! ```toml
//! repository = "https://github.com/example/tool"
//! artifacts = ["tool_linux_amd64"]
//! toolchain_sha256 = "..."
//! ```

use std::fs;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
  DEFAULT_ARTIFACT_ID, DEFAULT_ARTIFACTS, DEFAULT_GROUP_ID, DEFAULT_PROJECT_NAME, DEFAULT_REPOSITORY,
  DEFAULT_TOOLCHAIN_ARCHIVE, PROJECT_CONFIG_FILE,
};
use crate::context::repo_path;
use crate::error::BuildError;

/// Identity of the downstream project and where its inputs come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
  pub name: String,
  /// Git URL of the downstream project.
  pub repository: String,
  /// Toolchain archive, relative to the checkout.
  pub toolchain_archive: String,
  /// Expected SHA-256 of the toolchain archive (lowercase hex). Not verified when unset.
  pub toolchain_sha256: Option<String>,
  /// Binaries the downstream build leaves in the root of its checkout.
  pub artifacts: Vec<String>,
  pub group_id: String,
  pub artifact_id: String,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      name: DEFAULT_PROJECT_NAME.to_string(),
      repository: DEFAULT_REPOSITORY.to_string(),
      toolchain_archive: DEFAULT_TOOLCHAIN_ARCHIVE.to_string(),
      toolchain_sha256: None,
      artifacts: DEFAULT_ARTIFACTS.iter().map(|s| s.to_string()).collect(),
      group_id: DEFAULT_GROUP_ID.to_string(),
      artifact_id: DEFAULT_ARTIFACT_ID.to_string(),
    }
  }
}

impl ProjectConfig {
  /// Load `build.toml` from `cfg_dir`, falling back to defaults when the file is absent.
  pub fn load(cfg_dir: &Path) -> Result<Self, BuildError> {
    let path = cfg_dir.join(PROJECT_CONFIG_FILE);
    if !path.is_file() {
      debug!(path = %path.display(), "no project configuration, using defaults");
      return Ok(Self::default());
    }

    let content = fs::read_to_string(&path).map_err(|e| BuildError::ReadFile {
      path: path.clone(),
      source: e,
    })?;
    let config = Self::parse(&content).map_err(|e| BuildError::Config {
      path: path.clone(),
      source: Box::new(e),
    })?;

    if !is_contained_repo_path(repo_path(&config.repository)) {
      return Err(BuildError::InvalidRepository {
        path,
        url: config.repository,
      });
    }

    debug!(path = %path.display(), name = %config.name, "loaded project configuration");
    Ok(config)
  }

  pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }
}

/// A checkout path is usable when it is non-empty and has no `..` segment.
fn is_contained_repo_path(checkout: &str) -> bool {
  let path = Path::new(checkout);
  path.components().next().is_some() && path.components().all(|c| !matches!(c, Component::ParentDir))
}
