use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

use cmd::{cmd_clean, cmd_deploy_vars, cmd_info, cmd_run, cmd_script};

/// gobuild - Build a Go project from a configuration directory
#[derive(Parser)]
#[command(name = "gobuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Configuration directory holding VERSION and the optional build.toml
  #[arg(long, global = true, default_value = "cfg")]
  cfg_dir: PathBuf,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the full build: clean, checkout, extract, build, collect
  Run,

  /// Remove the build workspace
  Clean,

  /// Print the launch script a build would generate
  Script {
    /// Version to pass to the downstream build (default: first line of VERSION)
    #[arg(long = "project-version")]
    version: Option<String>,
  },

  /// Show the paths derived from the configuration directory
  Info {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },

  /// Print the deploy variables (groupId, artifactId)
  DeployVars {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Run => cmd_run(&cli.cfg_dir),
    Commands::Clean => cmd_clean(&cli.cfg_dir),
    Commands::Script { version } => cmd_script(&cli.cfg_dir, version.as_deref()),
    Commands::Info { json } => cmd_info(&cli.cfg_dir, json),
    Commands::DeployVars { json } => cmd_deploy_vars(&cli.cfg_dir, json),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      output::print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
