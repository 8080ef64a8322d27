use anyhow::{Context, Result, anyhow};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use super::style;
use crate::config::{CONFIG_DIR, CONFIG_FILENAME, Config, user_config_path};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a config template (user config unless FILE is given)
    Init { file: Option<PathBuf> },
    /// Check that a config file parses (user config unless FILE is given)
    Validate { file: Option<PathBuf> },
    /// Print where the user config lives and what it resolves to
    Show,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Init { file } => write_template(&target(file)?),
        ConfigCommand::Validate { file } => validate(&target(file)?),
        ConfigCommand::Show => show(),
    }
}

fn target(file: Option<PathBuf>) -> Result<PathBuf> {
    file.or_else(user_config_path).ok_or_else(|| {
        anyhow!("no config directory on this platform, pass a path for {CONFIG_DIR}/{CONFIG_FILENAME}")
    })
}

/// Writes the default config to `path` unless something is already there.
fn write_template(path: &Path) -> Result<()> {
    if path.exists() {
        println!(
            "{}",
            style::warn(&format!("{} already exists.", path.display()))
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let template = serde_json::to_string_pretty(&Config::default())?;
    std::fs::write(path, format!("{template}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!(
        "{}",
        style::success(&format!("Created {}", path.display()))
    );
    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    match Config::from_file(path) {
        Ok(config) => {
            println!("{}", style::success(&format!("{} is valid", path.display())));
            print_summary(&config);
            Ok(())
        }
        Err(e) => {
            println!("{}", style::error(&e.to_string()));
            Err(anyhow!("config validation failed"))
        }
    }
}

fn show() -> Result<()> {
    match user_config_path() {
        Some(p) if p.exists() => println!("User config: {}", p.display()),
        Some(p) => println!("User config: {} (not found, using defaults)", p.display()),
        None => println!("User config: not available on this platform"),
    }
    let config = Config::load(None)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn print_summary(config: &Config) {
    println!("  output.format = {:?}", config.output.format);
    println!("  output.quiet  = {}", config.output.quiet);
}
