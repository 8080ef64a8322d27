//! Build identifiers and repository URLs handed to the CI upload step.

use std::fmt;

use serde::Serialize;

use crate::date::BuildDate;
use crate::host::HostFacts;

pub const ID_PREFIX: &str = "REDasm";
pub const ARCHIVE_EXTENSION: &str = "zip";
pub const GIT_HOST: &str = "github.com";
pub const ORGANIZATION: &str = "REDasmOrg";
pub const BUILD_REPO: &str = "REDasm-Builds";
pub const DATABASE_REPO_URL: &str = "https://github.com/REDasmOrg/REDasm-Database.git";
/// The only variable the push token is read from.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

pub const MISSING_TOKEN_WARNING: &str = "WARNING: Invalid GH-Token";
pub const TOKEN_MASK: &str = "***";

/// Variable names in the order they are rendered.
pub const VAR_NAMES: [&str; 8] = [
    "OS_NAME",
    "ARCH",
    "BUILD_DATE",
    "BUILD_ID",
    "BUILD_ARCHIVE",
    "BUILD_REPO",
    "DATABASE_REPO_URL",
    "BUILD_REPO_URL",
];

/// Every value the upload step consumes, computed once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct BuildVars {
    pub os_name: String,
    pub arch: String,
    pub build_date: String,
    pub build_id: String,
    pub build_archive: String,
    token: Option<String>,
}

impl BuildVars {
    /// Derives all variables from already-gathered inputs. Never fails: a missing
    /// token falls back to the unauthenticated URL.
    pub fn resolve(host: &HostFacts, date: BuildDate, token: Option<String>) -> Self {
        let os_name = host.os_name();
        let arch = host.machine.clone();
        let build_date = date.to_string();
        let build_id = format!("{ID_PREFIX}_{os_name}_{arch}_{build_date}");
        let build_archive = format!("{build_id}.{ARCHIVE_EXTENSION}");

        Self {
            os_name,
            arch,
            build_date,
            build_id,
            build_archive,
            token,
        }
    }

    /// Reads the host, the clock (unless `date` pins it) and `GITHUB_TOKEN`.
    pub fn from_env(date: Option<BuildDate>) -> Self {
        let host = HostFacts::detect();
        let date = date.unwrap_or_else(BuildDate::today);
        let token =
            std::env::var_os(TOKEN_ENV_VAR).map(|value| value.to_string_lossy().into_owned());

        tracing::debug!(
            host = %host,
            date = %date,
            token_present = token.is_some(),
            "resolving build variables"
        );

        Self::resolve(&host, date, token)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn missing_token_warning(&self) -> Option<&'static str> {
        if self.has_token() {
            None
        } else {
            Some(MISSING_TOKEN_WARNING)
        }
    }

    /// Push URL with the token embedded as userinfo, if one was found.
    pub fn build_repo_url(&self) -> String {
        self.render_repo_url(true)
    }

    /// Push URL with any token replaced by a mask, safe to print or log.
    pub fn build_repo_url_redacted(&self) -> String {
        self.render_repo_url(false)
    }

    fn render_repo_url(&self, reveal: bool) -> String {
        let path = format!("{GIT_HOST}/{ORGANIZATION}/{BUILD_REPO}.git");
        match &self.token {
            Some(token) if reveal => format!("https://{token}@{path}"),
            Some(_) => format!("https://{TOKEN_MASK}@{path}"),
            None => format!("https://{path}"),
        }
    }

    /// `(name, value)` pairs in render order.
    pub fn entries(&self, reveal_token: bool) -> Vec<(&'static str, String)> {
        VAR_NAMES
            .iter()
            .map(|&name| {
                let value = self.get(name, reveal_token).unwrap_or_default();
                (name, value)
            })
            .collect()
    }

    /// Looks up one variable by name, ignoring ASCII case.
    pub fn get(&self, name: &str, reveal_token: bool) -> Option<String> {
        let value = match name.to_ascii_uppercase().as_str() {
            "OS_NAME" => self.os_name.clone(),
            "ARCH" => self.arch.clone(),
            "BUILD_DATE" => self.build_date.clone(),
            "BUILD_ID" => self.build_id.clone(),
            "BUILD_ARCHIVE" => self.build_archive.clone(),
            "BUILD_REPO" => BUILD_REPO.to_string(),
            "DATABASE_REPO_URL" => DATABASE_REPO_URL.to_string(),
            "BUILD_REPO_URL" => self.render_repo_url(reveal_token),
            _ => return None,
        };
        Some(value)
    }

    pub fn to_snapshot(&self, reveal_token: bool) -> VarsSnapshot {
        VarsSnapshot {
            os_name: self.os_name.clone(),
            arch: self.arch.clone(),
            build_date: self.build_date.clone(),
            build_id: self.build_id.clone(),
            build_archive: self.build_archive.clone(),
            build_repo: BUILD_REPO.to_string(),
            database_repo_url: DATABASE_REPO_URL.to_string(),
            build_repo_url: self.render_repo_url(reveal_token),
        }
    }
}

impl fmt::Debug for BuildVars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildVars")
            .field("os_name", &self.os_name)
            .field("arch", &self.arch)
            .field("build_date", &self.build_date)
            .field("build_id", &self.build_id)
            .field("build_archive", &self.build_archive)
            .field("build_repo_url", &self.build_repo_url_redacted())
            .finish()
    }
}

/// Serializable view keyed by the variable names CI scripts expect.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct VarsSnapshot {
    pub os_name: String,
    pub arch: String,
    pub build_date: String,
    pub build_id: String,
    pub build_archive: String,
    pub build_repo: String,
    pub database_repo_url: String,
    pub build_repo_url: String,
}
