//! The build pipeline.
//!
//! A build runs seven steps in a fixed order, each assuming the previous one
//! succeeded:
//! 1. Clean the workspace left by a previous run
//! 2. Create the workspace directories
//! 3. Check out the downstream project and read its version
//! 4. Extract the toolchain archive shipped in the checkout
//! 5. Generate the launch script
//! 6. Run the launch script
//! 7. Collect the artifacts into the output directory
//!
//! There are no retries and no partial results: the first failing step ends
//! the build with its error.

pub mod artifacts;
pub mod launch;
pub mod script;
pub mod source;
pub mod toolchain;
pub mod workspace;

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::info;

use crate::context::{BuildConfig, BuildContext};
use crate::error::BuildError;

pub use source::{GitFetcher, SourceFetcher, Version};

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
  pub version: Version,
  /// Collected artifacts, in configuration order.
  pub artifacts: Vec<PathBuf>,
}

/// Entry points expected by whatever drives a build.
pub trait BuildPlugin {
  /// Run the whole pipeline.
  fn run(&self) -> Result<BuildOutcome, BuildError>;

  /// Coordinates under which the artifacts are published.
  fn deploy_variables(&self) -> BTreeMap<String, String>;
}

/// Runs the build pipeline for one context.
#[derive(Debug)]
pub struct Orchestrator<F = GitFetcher> {
  ctx: BuildContext,
  fetcher: F,
}

impl Orchestrator<GitFetcher> {
  /// Load the context for `config` and check sources out with git.
  pub fn new(config: &impl BuildConfig) -> Result<Self, BuildError> {
    Ok(Self::with_fetcher(BuildContext::load(config)?, GitFetcher))
  }
}

impl<F: SourceFetcher> Orchestrator<F> {
  pub fn with_fetcher(ctx: BuildContext, fetcher: F) -> Self {
    Self { ctx, fetcher }
  }

  pub fn context(&self) -> &BuildContext {
    &self.ctx
  }

  pub fn clean_workspace(&self) -> Result<(), BuildError> {
    workspace::clean_workspace(&self.ctx)
  }

  pub fn create_workspace(&self) -> Result<(), BuildError> {
    workspace::create_workspace(&self.ctx)
  }

  pub fn fetch_source(&self) -> Result<Version, BuildError> {
    source::fetch_source(&self.ctx, &self.fetcher)
  }

  pub fn extract_toolchain(&self) -> Result<(), BuildError> {
    toolchain::extract_toolchain(&self.ctx)
  }

  pub fn generate_launch_script(&self, version: &Version) -> Result<PathBuf, BuildError> {
    script::write_launch_script(&self.ctx, version)
  }

  pub fn run_launch_script(&self) -> Result<(), BuildError> {
    launch::run_launch_script(&self.ctx.launch_script)
  }

  pub fn collect_artifacts(&self) -> Result<Vec<PathBuf>, BuildError> {
    artifacts::collect_artifacts(&self.ctx)
  }
}

impl<F: SourceFetcher> BuildPlugin for Orchestrator<F> {
  fn run(&self) -> Result<BuildOutcome, BuildError> {
    info!(project = %self.ctx.project.name, "building");

    self.clean_workspace()?;
    self.create_workspace()?;
    let version = self.fetch_source()?;
    self.extract_toolchain()?;
    self.generate_launch_script(&version)?;
    self.run_launch_script()?;
    let artifacts = self.collect_artifacts()?;

    info!(project = %self.ctx.project.name, version = %version, "build complete");
    Ok(BuildOutcome { version, artifacts })
  }

  fn deploy_variables(&self) -> BTreeMap<String, String> {
    BTreeMap::from([
      ("groupId".to_string(), self.ctx.project.group_id.clone()),
      ("artifactId".to_string(), self.ctx.project.artifact_id.clone()),
    ])
  }
}
