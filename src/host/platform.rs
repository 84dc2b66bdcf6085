//! Host platform classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse host operating system classification.
///
/// Gates platform-specific rules and package manager tips. Derived once
/// with [`Platform::current`] and passed down explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Darwin,
    Other,
}

impl Platform {
    /// All platforms, in declaration order.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Darwin, Platform::Other];

    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Darwin
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    /// Lowercase identifier used in config files and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Darwin => "darwin",
            Platform::Other => "other",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "windows" | "win32" => Ok(Self::Windows),
            "darwin" | "macos" => Ok(Self::Darwin),
            "other" | "linux" => Ok(Self::Other),
            _ => Err(format!("unknown platform: {}", s)),
        }
    }
}
