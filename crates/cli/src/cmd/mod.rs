mod clean;
mod deploy_vars;
mod info;
mod run;
mod script;

pub use clean::cmd_clean;
pub use deploy_vars::cmd_deploy_vars;
pub use info::cmd_info;
pub use run::cmd_run;
pub use script::cmd_script;
