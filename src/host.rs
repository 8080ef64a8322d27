use std::fmt;

/// Platform and machine facts for the host the tool runs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFacts {
    /// Lowercase platform identifier (`linux`, `win32`, `darwin`, ...)
    pub platform: String,
    /// Machine architecture as the OS names it (`x86_64`, `AMD64`, `arm64`, ...)
    pub machine: String,
}

impl HostFacts {
    pub fn new(platform: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            machine: machine.into(),
        }
    }

    pub fn detect() -> Self {
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;
        Self::new(platform_id(os), machine_name(os, arch))
    }

    /// Platform identifier with its first letter uppercased and the rest lowercased.
    pub fn os_name(&self) -> String {
        capitalize(&self.platform)
    }
}

impl fmt::Display for HostFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.machine)
    }
}

/// Maps a Rust OS constant to the platform identifier CI artifact names use.
pub fn platform_id(os: &str) -> String {
    match os {
        "windows" => "win32".to_string(),
        "macos" => "darwin".to_string(),
        other => other.to_lowercase(),
    }
}

/// Maps a Rust arch constant to the machine name the host OS reports.
pub fn machine_name(os: &str, arch: &str) -> String {
    match (os, arch) {
        ("windows", "x86_64") => "AMD64".to_string(),
        ("windows", "x86") => "x86".to_string(),
        ("windows", "aarch64") => "ARM64".to_string(),
        ("macos" | "ios", "aarch64") => "arm64".to_string(),
        (_, "x86") => "i686".to_string(),
        (_, arch) => arch.to_string(),
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
