use anyhow::{Context, Result};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::{ResolveArgs, report_missing_token, style};
use crate::output::{self, Format};

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Output format [default: text, or output.format from the config]
    #[arg(long, short, value_enum)]
    pub format: Option<Format>,
    /// Append the rendered variables to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Show the access token in the text table instead of masking it
    #[arg(long)]
    pub reveal_token: bool,
    #[command(flatten)]
    pub resolve: ResolveArgs,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let config = args.resolve.load_config()?;
    let vars = args.resolve.resolve()?;
    let format = args.format.unwrap_or(config.output.format);
    report_missing_token(&vars, args.resolve.quiet || config.output.quiet);

    // Only the human table masks by default; scripts and files need a pushable URL.
    let reveal = args.reveal_token || format.is_machine() || args.output.is_some();
    let rendered = output::render(&vars, format, reveal)?;

    if let Some(path) = &args.output {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        file.write_all(rendered.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), format = ?format, "wrote build variables");
        return Ok(());
    }

    if format == Format::Text {
        println!(
            "{}\n",
            style::heading(&format!(
                "deploy-vars v{} ({})",
                env!("CARGO_PKG_VERSION"),
                env!("DEPLOY_VARS_TARGET")
            ))
        );
    }
    print!("{rendered}");
    Ok(())
}
