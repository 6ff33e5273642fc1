//! Source checkout and version discovery.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::context::BuildContext;
use crate::error::BuildError;

/// Populates a directory with the downstream project's sources.
pub trait SourceFetcher {
  /// Check out `url` into `dest`. `dest` exists and is empty.
  fn fetch(&self, url: &str, dest: &Path) -> Result<(), BuildError>;
}

/// Clones over the network with gix.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitFetcher;

impl SourceFetcher for GitFetcher {
  fn fetch(&self, url: &str, dest: &Path) -> Result<(), BuildError> {
    info!(url, path = %dest.display(), "cloning repository");

    let clone_err = |e: Box<dyn std::error::Error + Send + Sync>| BuildError::Clone {
      url: url.to_string(),
      source: e,
    };

    let mut prepared = gix::prepare_clone(url, dest).map_err(|e| clone_err(Box::new(e)))?;

    let (mut checkout, _outcome) = prepared
      .fetch_then_checkout(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
      .map_err(|e| clone_err(Box::new(e)))?;

    let (repo, _outcome) = checkout
      .main_worktree(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
      .map_err(|e| clone_err(Box::new(e)))?;

    debug!(git_dir = %repo.git_dir().display(), "clone complete");
    Ok(())
  }
}

/// Version of the downstream project, passed to its build entry point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
  /// Take the first line of `content`, without trailing whitespace.
  ///
  /// Returns `None` when that line is empty.
  pub fn parse(content: &str) -> Option<Self> {
    let first = content.lines().next()?.trim_end();
    if first.is_empty() {
      return None;
    }
    Some(Self(first.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Read the version from `path`.
pub fn read_version(path: &Path) -> Result<Version, BuildError> {
  if !path.is_file() {
    return Err(BuildError::MissingInput {
      what: "version file",
      path: path.to_path_buf(),
    });
  }

  let content = fs::read_to_string(path).map_err(|e| BuildError::ReadFile {
    path: path.to_path_buf(),
    source: e,
  })?;

  Version::parse(&content).ok_or_else(|| BuildError::EmptyVersion {
    path: path.to_path_buf(),
  })
}

/// Check out the downstream project into the build path and read its version.
pub fn fetch_source(ctx: &BuildContext, fetcher: &impl SourceFetcher) -> Result<Version, BuildError> {
  fetcher.fetch(&ctx.project.repository, &ctx.build_path)?;

  let version = read_version(&ctx.version_file)?;
  info!(version = %version, "resolved project version");
  Ok(version)
}
