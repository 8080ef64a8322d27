use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deploy_vars::cli;
use deploy_vars::cli::ResolveArgs;
use deploy_vars::cli::config_cmd::ConfigArgs;
use deploy_vars::cli::show::ShowArgs;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("DEPLOY_VARS_TARGET"),
    ")"
);

#[derive(Parser)]
#[command(
    name = "deploy-vars",
    version,
    long_version = LONG_VERSION,
    about = "Build identifiers and repository URLs for REDasm CI uploads"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every build variable (default)
    Show(ShowArgs),
    /// Print a single build variable, e.g. BUILD_ARCHIVE
    Get {
        /// Variable name (case-insensitive)
        name: String,
        #[command(flatten)]
        resolve: ResolveArgs,
    },
    /// Manage output preferences (user config file)
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Show(args)) => cli::show::run(args),
        Some(Commands::Get { name, resolve }) => cli::get::run(&name, resolve),
        Some(Commands::Config(args)) => cli::config_cmd::run(args),
        None => cli::show::run(ShowArgs::default()),
    }
}
