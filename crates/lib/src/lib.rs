//! gobuild-lib: build orchestration for a downstream Go project.
//!
//! This crate provides:
//! - `BuildContext`: the immutable set of paths derived from a configuration directory
//! - `ProjectConfig`: project identity, optionally loaded from `build.toml`
//! - `Orchestrator`: the fixed clean → create → fetch → extract → script → run → collect pipeline

pub mod config;
pub mod consts;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod util;

pub use config::ProjectConfig;
pub use context::{BuildConfig, BuildContext, DirBuildConfig};
pub use error::BuildError;
pub use pipeline::{BuildOutcome, BuildPlugin, GitFetcher, Orchestrator, SourceFetcher, Version};
