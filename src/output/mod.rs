use std::fmt::{self, Write as _};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::vars::BuildVars;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Aligned table for humans
    #[default]
    Text,
    /// KEY=VALUE lines, suitable for $GITHUB_ENV
    Env,
    /// `export KEY='VALUE'` lines for `eval`
    Shell,
    /// One JSON object
    Json,
}

impl Format {
    /// Formats read by scripts rather than people. These carry the usable push URL.
    pub fn is_machine(self) -> bool {
        !matches!(self, Format::Text)
    }
}

#[derive(Debug)]
pub enum OutputError {
    /// A value would split into several `KEY=VALUE` lines.
    LineBreak { name: &'static str },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::LineBreak { name } => {
                write!(
                    f,
                    "{name} contains a line break and cannot be written as KEY=VALUE"
                )
            }
        }
    }
}

impl std::error::Error for OutputError {}

pub fn render(
    vars: &BuildVars,
    format: Format,
    reveal_token: bool,
) -> Result<String, OutputError> {
    let rendered = match format {
        Format::Text => render_text(vars, reveal_token),
        Format::Env => render_env(vars, reveal_token)?,
        Format::Shell => render_shell(vars, reveal_token),
        Format::Json => render_json(vars, reveal_token),
    };
    Ok(rendered)
}

fn render_text(vars: &BuildVars, reveal_token: bool) -> String {
    let entries = vars.entries(reveal_token);
    let width = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (name, value) in &entries {
        let _ = writeln!(out, "  {name:<width$}  {value}");
    }
    out
}

fn render_env(vars: &BuildVars, reveal_token: bool) -> Result<String, OutputError> {
    let mut out = String::new();
    for (name, value) in vars.entries(reveal_token) {
        if value.contains(['\n', '\r']) {
            return Err(OutputError::LineBreak { name });
        }
        let _ = writeln!(out, "{name}={value}");
    }
    Ok(out)
}

fn render_shell(vars: &BuildVars, reveal_token: bool) -> String {
    vars.entries(reveal_token)
        .into_iter()
        .map(|(name, value)| format!("export {name}={}\n", shell_quote(&value)))
        .collect()
}

fn render_json(vars: &BuildVars, reveal_token: bool) -> String {
    let snapshot = vars.to_snapshot(reveal_token);
    // A struct of plain strings always serializes.
    let json = serde_json::to_string_pretty(&snapshot).unwrap_or_default();
    format!("{json}\n")
}

/// Wraps a value in single quotes, escaping embedded quotes as `'\''`.
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
