//! Error types for the build pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the build pipeline.
///
/// Every variant carries the path or URL it concerns so that the caller can
/// report the failing step without extra context.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The configuration directory could not be resolved.
  #[error("failed to resolve configuration directory {}: {source}", path.display())]
  ResolveConfigDir { path: PathBuf, source: std::io::Error },

  /// `build.toml` exists but could not be parsed.
  #[error("invalid project configuration {}: {source}", path.display())]
  Config {
    path: PathBuf,
    #[source]
    source: Box<toml::de::Error>,
  },

  /// The configured repository does not map to a directory below `GOPATH/src`.
  #[error("invalid repository {url:?} in {}: its path must stay below GOPATH/src", path.display())]
  InvalidRepository { path: PathBuf, url: String },

  #[error("failed to read {}: {source}", path.display())]
  ReadFile { path: PathBuf, source: std::io::Error },

  #[error("failed to write {}: {source}", path.display())]
  WriteFile { path: PathBuf, source: std::io::Error },

  #[error("failed to remove directory {}: {source}", path.display())]
  RemoveDir { path: PathBuf, source: std::io::Error },

  /// A workspace directory was already present when it should have been cleaned.
  #[error("path already exists: {}", path.display())]
  PathExists { path: PathBuf },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error("failed to set permissions on {}: {source}", path.display())]
  SetPermissions { path: PathBuf, source: std::io::Error },

  #[error("failed to change working directory to {}: {source}", path.display())]
  ChangeDir { path: PathBuf, source: std::io::Error },

  /// The source checkout failed.
  #[error("failed to clone repository '{url}': {source}")]
  Clone {
    url: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },

  /// A required input file is absent.
  #[error("missing {what}: {}", path.display())]
  MissingInput { what: &'static str, path: PathBuf },

  /// The version file exists but its first line is empty.
  #[error("version file {} is empty", path.display())]
  EmptyVersion { path: PathBuf },

  #[error("unsupported archive format: {}", path.display())]
  UnsupportedArchive { path: PathBuf },

  #[error("checksum mismatch for {}: expected {expected}, got {actual}", path.display())]
  ChecksumMismatch {
    path: PathBuf,
    expected: String,
    actual: String,
  },

  /// The archive exists but could not be unpacked.
  #[error("failed to extract {}: {source}", path.display())]
  Extract { path: PathBuf, source: std::io::Error },

  #[error("failed to launch {}: {source}", path.display())]
  Spawn { path: PathBuf, source: std::io::Error },

  /// The downstream build exited unsuccessfully. `code` is `None` when it was killed by a signal.
  #[error("downstream build {} failed with exit code {code:?}", script.display())]
  DownstreamBuildFailed { script: PathBuf, code: Option<i32> },

  /// An expected artifact was not produced by the downstream build.
  #[error("artifact '{name}' not found at {}", path.display())]
  MissingArtifact { name: String, path: PathBuf },

  #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
  Copy {
    from: PathBuf,
    to: PathBuf,
    source: std::io::Error,
  },
}

impl BuildError {
  /// Whether this error reports an absent input file rather than a failed operation.
  pub fn is_missing_input(&self) -> bool {
    matches!(self, BuildError::MissingInput { .. })
  }
}
