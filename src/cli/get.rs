use anyhow::{Result, bail};

use super::{ResolveArgs, report_missing_token};
use crate::vars::VAR_NAMES;

/// Prints one variable. BUILD_REPO_URL carries the real token: `get` exists for
/// scripts, which need a URL they can push to.
pub fn run(name: &str, args: ResolveArgs) -> Result<()> {
    let config = args.load_config()?;
    let vars = args.resolve()?;
    let Some(value) = vars.get(name, true) else {
        bail!(
            "unknown variable '{name}' (expected one of {})",
            VAR_NAMES.join(", ")
        );
    };
    report_missing_token(&vars, args.quiet || config.output.quiet);
    println!("{value}");
    Ok(())
}
