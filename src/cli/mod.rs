pub mod config_cmd;
pub mod get;
pub mod show;
pub mod style;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::date::BuildDate;
use crate::vars::BuildVars;

/// Inputs shared by every command that resolves build variables.
#[derive(Args, Debug, Default)]
pub struct ResolveArgs {
    /// Pin the build date instead of using today (YYYYMMDD)
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: Option<String>,
    /// Do not print the missing-token warning
    #[arg(long, short)]
    pub quiet: bool,
    /// Read output preferences from this file instead of the user config
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ResolveArgs {
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.config.as_deref())?)
    }

    /// Parses the date override and resolves the variables once.
    pub fn resolve(&self) -> Result<BuildVars> {
        let date = self.date.as_deref().map(BuildDate::parse).transpose()?;
        Ok(BuildVars::from_env(date))
    }
}

/// Prints the missing-token notice on stdout, where CI logs pick it up.
pub fn report_missing_token(vars: &BuildVars, quiet: bool) {
    if quiet {
        return;
    }
    if let Some(warning) = vars.missing_token_warning() {
        println!("{}", style::warn(warning));
    }
}
