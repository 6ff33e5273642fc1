//! Shared test helpers for pipeline tests.

use std::fs::{self, File};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use gobuild_lib::{BuildContext, BuildError, DirBuildConfig, Orchestrator, SourceFetcher};
use tempfile::TempDir;

pub const VERSION: &str = "1.2.3";

/// Downstream build entry point: checks its argument and the exported
/// toolchain, then writes one file per artifact.
const DOWNSTREAM_BUILD_SH: &str = r#"#!/bin/bash -e
test "$1" = "1.2.3"
test -x "$GOROOT/bin/go"
for name in mta_plugin_linux_amd64 mta_plugin_darwin_amd64 mta_plugin_windows_amd64.exe; do
  echo "$name $1" > "$name"
done
"#;

const FAILING_BUILD_SH: &str = "#!/bin/bash -e\necho 'compile error' >&2\nexit 2\n";

/// How the simulated checkout should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkout {
  /// Build script that succeeds, plus the toolchain archive.
  Working,
  /// Build script that exits non-zero, plus the toolchain archive.
  FailingBuild,
  /// Build script but no toolchain archive.
  NoToolchain,
}

/// Lays out a downstream project instead of cloning one.
pub struct FakeFetcher {
  pub checkout: Checkout,
  pub toolchain_archive: String,
}

impl SourceFetcher for FakeFetcher {
  fn fetch(&self, _url: &str, dest: &Path) -> Result<(), BuildError> {
    let script = match self.checkout {
      Checkout::FailingBuild => FAILING_BUILD_SH,
      Checkout::Working | Checkout::NoToolchain => DOWNSTREAM_BUILD_SH,
    };
    let build_sh = dest.join("build.sh");
    fs::write(&build_sh, script).unwrap();
    fs::set_permissions(&build_sh, fs::Permissions::from_mode(0o755)).unwrap();

    if self.checkout != Checkout::NoToolchain {
      write_toolchain(&dest.join(&self.toolchain_archive));
    }
    Ok(())
  }
}

/// Write a tiny "Go distribution": `go/bin/go` as an executable script.
fn write_toolchain(path: &Path) {
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  let content = b"#!/bin/sh\necho go version go1.8.1\n";

  let mut builder = tar::Builder::new(GzEncoder::new(File::create(path).unwrap(), Compression::default()));
  let mut header = tar::Header::new_gnu();
  header.set_size(content.len() as u64);
  header.set_mode(0o755);
  header.set_cksum();
  builder.append_data(&mut header, "go/bin/go", &content[..]).unwrap();
  builder.into_inner().unwrap().finish().unwrap();
}

/// Isolated build environment: `<temp>/cfg` holds the configuration.
pub struct TestEnv {
  pub temp: TempDir,
  pub cfg_dir: PathBuf,
}

impl TestEnv {
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let cfg_dir = temp.path().join("cfg");
    Self::with_cfg_dir(temp, cfg_dir)
  }

  /// Like `new`, but with the configuration at `<temp>/<parent>/cfg`.
  pub fn under(parent: &str) -> Self {
    let temp = TempDir::new().unwrap();
    let cfg_dir = temp.path().join(parent).join("cfg");
    Self::with_cfg_dir(temp, cfg_dir)
  }

  fn with_cfg_dir(temp: TempDir, cfg_dir: PathBuf) -> Self {
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("VERSION"), format!("{VERSION}\nrelease notes follow\n")).unwrap();
    Self { temp, cfg_dir }
  }

  pub fn orchestrator(&self, checkout: Checkout) -> Orchestrator<FakeFetcher> {
    let ctx = BuildContext::load(&DirBuildConfig::new(&self.cfg_dir)).unwrap();
    let fetcher = FakeFetcher {
      checkout,
      toolchain_archive: ctx.project.toolchain_archive.clone(),
    };
    Orchestrator::with_fetcher(ctx, fetcher)
  }
}

/// Restores the working directory on drop; the pipeline moves it on success.
pub struct CwdGuard(PathBuf);

impl CwdGuard {
  pub fn new() -> Self {
    Self(std::env::current_dir().unwrap())
  }
}

impl Drop for CwdGuard {
  fn drop(&mut self) {
    let _ = std::env::set_current_dir(&self.0);
  }
}
