//! Toolchain archive extraction.
//!
//! The archive is unpacked as-is: a Go distribution holding `go/...` ends up
//! as `<install_dir>/go/...`, which is where `GOROOT` points.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use tar::Archive;
use tracing::{debug, info};

use crate::context::BuildContext;
use crate::error::BuildError;
use crate::util::hash::hash_file;

/// Archive formats the toolchain may be shipped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
  TarGz,
  Tar,
}

impl ArchiveKind {
  /// Detect the format from the file name.
  pub fn from_path(path: &Path) -> Option<Self> {
    let name = path.file_name()?.to_str()?;
    if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
      Some(ArchiveKind::TarGz)
    } else if name.ends_with(".tar") {
      Some(ArchiveKind::Tar)
    } else {
      None
    }
  }
}

/// Unpack `archive` into `dest`.
///
/// Fails with `MissingInput` when the archive does not exist, before any
/// attempt to read it. When `expected_sha256` is given the archive is hashed
/// and compared first.
pub fn extract_archive(archive: &Path, dest: &Path, expected_sha256: Option<&str>) -> Result<(), BuildError> {
  if !archive.is_file() {
    return Err(BuildError::MissingInput {
      what: "toolchain archive",
      path: archive.to_path_buf(),
    });
  }

  let kind = ArchiveKind::from_path(archive).ok_or_else(|| BuildError::UnsupportedArchive {
    path: archive.to_path_buf(),
  })?;

  if let Some(expected) = expected_sha256 {
    verify_checksum(archive, expected)?;
  }

  let extract_err = |e| BuildError::Extract {
    path: archive.to_path_buf(),
    source: e,
  };

  let file = File::open(archive).map_err(extract_err)?;
  let reader = BufReader::new(file);
  let unpacked = match kind {
    ArchiveKind::TarGz => unpack(GzDecoder::new(reader), dest),
    ArchiveKind::Tar => unpack(reader, dest),
  };
  unpacked.map_err(extract_err)?;

  info!(archive = %archive.display(), dest = %dest.display(), "extracted toolchain");
  Ok(())
}

fn unpack<R: Read>(reader: R, dest: &Path) -> std::io::Result<()> {
  let mut archive = Archive::new(reader);
  archive.set_preserve_permissions(true);
  archive.unpack(dest)
}

fn verify_checksum(archive: &Path, expected: &str) -> Result<(), BuildError> {
  let actual = hash_file(archive).map_err(|e| BuildError::ReadFile {
    path: archive.to_path_buf(),
    source: e,
  })?;

  if !actual.eq_ignore_ascii_case(expected) {
    return Err(BuildError::ChecksumMismatch {
      path: archive.to_path_buf(),
      expected: expected.to_string(),
      actual,
    });
  }

  debug!(archive = %archive.display(), sha256 = %actual, "checksum verified");
  Ok(())
}

/// Extract the configured toolchain archive into the install directory.
pub fn extract_toolchain(ctx: &BuildContext) -> Result<(), BuildError> {
  info!(archive = %ctx.toolchain_archive.display(), "extracting toolchain");
  extract_archive(
    &ctx.toolchain_archive,
    &ctx.install_dir,
    ctx.project.toolchain_sha256.as_deref(),
  )
}
