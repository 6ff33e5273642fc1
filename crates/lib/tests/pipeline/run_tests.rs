//! Full pipeline runs.

use std::fs;
use std::os::unix::fs::PermissionsExt;

use gobuild_lib::{BuildError, BuildPlugin};
use serial_test::serial;

use super::common::{Checkout, CwdGuard, TestEnv, VERSION};

#[test]
#[serial]
fn run_collects_all_artifacts() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::new();
  let orchestrator = env.orchestrator(Checkout::Working);
  let ctx = orchestrator.context().clone();

  let outcome = orchestrator.run().unwrap();

  assert_eq!(outcome.version.as_str(), VERSION);
  assert_eq!(outcome.artifacts.len(), 3);
  for name in &ctx.project.artifacts {
    let path = ctx.out_dir.join(name);
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{name} {VERSION}\n"));
    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o777, "{name} should be world accessible");
  }
  assert_eq!(std::env::current_dir().unwrap(), ctx.return_dir());
}

#[test]
#[serial]
fn run_handles_spaces_in_paths() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::under("my project");
  let orchestrator = env.orchestrator(Checkout::Working);
  let ctx = orchestrator.context().clone();
  assert!(ctx.build_path.to_string_lossy().contains("my project"));

  let outcome = orchestrator.run().unwrap();

  assert_eq!(outcome.artifacts.len(), 3);
  for name in &ctx.project.artifacts {
    assert!(ctx.out_dir.join(name).is_file(), "{name} should be collected");
  }
}

#[test]
#[serial]
fn run_twice_cleans_previous_workspace() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::new();
  let orchestrator = env.orchestrator(Checkout::Working);

  orchestrator.run().unwrap();
  let marker = orchestrator.context().build_path.join("from-first-run");
  fs::write(&marker, "x").unwrap();

  orchestrator.run().unwrap();

  assert!(!marker.exists());
  assert!(orchestrator.context().install_dir.join("go/bin/go").is_file());
}

#[test]
#[serial]
fn run_writes_reproducible_launch_script() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::new();
  let orchestrator = env.orchestrator(Checkout::Working);
  let ctx = orchestrator.context();

  orchestrator.run().unwrap();
  let first = fs::read_to_string(&ctx.launch_script).unwrap();
  orchestrator.run().unwrap();
  let second = fs::read_to_string(&ctx.launch_script).unwrap();

  assert_eq!(first, second);
  assert!(first.starts_with("#!/bin/bash -e\n"));
  assert!(first.contains(&format!("export BUILD_PATH=\"{}\"\n", ctx.build_path.display())));
  assert!(first.ends_with(&format!("./build.sh {VERSION}\n")));
}

#[test]
#[serial]
fn failing_downstream_build_is_reported() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::new();
  let orchestrator = env.orchestrator(Checkout::FailingBuild);

  let err = orchestrator.run().unwrap_err();

  assert!(
    matches!(err, BuildError::DownstreamBuildFailed { code: Some(2), .. }),
    "unexpected error: {err}"
  );
  assert!(!orchestrator.context().out_dir.exists());
}

#[test]
#[serial]
fn missing_toolchain_is_missing_input() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::new();
  let orchestrator = env.orchestrator(Checkout::NoToolchain);

  let err = orchestrator.run().unwrap_err();

  assert!(err.is_missing_input(), "unexpected error: {err}");
  assert!(!orchestrator.context().launch_script.exists());
}

#[test]
#[serial]
fn missing_version_file_stops_after_checkout() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::new();
  fs::remove_file(env.cfg_dir.join("VERSION")).unwrap();
  let orchestrator = env.orchestrator(Checkout::Working);

  let err = orchestrator.run().unwrap_err();

  assert!(err.is_missing_input(), "unexpected error: {err}");
  assert!(orchestrator.context().build_path.join("build.sh").exists());
  assert!(!orchestrator.context().install_dir.join("go").exists());
}

#[test]
#[serial]
fn project_config_overrides_artifacts() {
  let _cwd = CwdGuard::new();
  let env = TestEnv::new();
  fs::write(
    env.cfg_dir.join("build.toml"),
    "artifacts = [\"mta_plugin_linux_amd64\"]\ngroup_id = \"org.example\"\n",
  )
  .unwrap();
  let orchestrator = env.orchestrator(Checkout::Working);

  let outcome = orchestrator.run().unwrap();

  assert_eq!(outcome.artifacts.len(), 1);
  assert_eq!(orchestrator.deploy_variables()["groupId"], "org.example");
  assert!(!orchestrator.context().out_dir.join("mta_plugin_darwin_amd64").exists());
}
