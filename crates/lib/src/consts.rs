//! Fixed names and defaults shared across the crate.

/// Directory, relative to the parent of the configuration directory, holding generated output.
pub const GEN_DIR: &str = "gen";
pub const WORKSPACE_DIR: &str = "go-workspace";
pub const GO_PATH_DIR: &str = "go-path";
pub const INSTALL_DIR: &str = "go-install-dir";
pub const GO_ROOT_DIR: &str = "go";
pub const OUT_DIR: &str = "out";

pub const VERSION_FILE: &str = "VERSION";
pub const LAUNCH_SCRIPT: &str = "build.sh";
pub const PROJECT_CONFIG_FILE: &str = "build.toml";

/// Entry point of the downstream project, relative to its checkout.
pub const DOWNSTREAM_ENTRY: &str = "./build.sh";

pub const DEFAULT_PROJECT_NAME: &str = "cf-cli-mta-plugin";
pub const DEFAULT_REPOSITORY: &str = "https://github.com/SAP/cf-mta-plugin";
pub const DEFAULT_TOOLCHAIN_ARCHIVE: &str = "go-binary/go1.8.1.linux-amd64.tar.gz";
pub const DEFAULT_ARTIFACTS: [&str; 3] = [
  "mta_plugin_linux_amd64",
  "mta_plugin_darwin_amd64",
  "mta_plugin_windows_amd64.exe",
];
pub const DEFAULT_GROUP_ID: &str = "com.SAP.golang";
pub const DEFAULT_ARTIFACT_ID: &str = "cf-cli-mta-plugin";

/// Mode applied to the launch script and collected artifacts.
pub const WORLD_ACCESSIBLE_MODE: u32 = 0o777;
