//! Warning record types.

use std::fmt;

use serde::Serialize;

/// Severity of a doctor finding. Every finding is a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

/// The third-party capability a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Adb,
    Ant,
    AndroidSdk,
    Xcode,
    Itunes,
    Java,
}

impl Capability {
    /// Identifier used in reports and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Adb => "adb",
            Capability::Ant => "ant",
            Capability::AndroidSdk => "android-sdk",
            Capability::Xcode => "xcode",
            Capability::Itunes => "itunes",
            Capability::Java => "java",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single doctor finding.
///
/// Built fresh per composition and handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    /// Which rule produced this warning.
    pub capability: Capability,
    pub severity: Severity,
    /// One-line description of the missing capability.
    pub headline: String,
    /// Multi-line remediation guidance.
    pub detail: String,
    /// Package manager suggestion, when the platform has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl Warning {
    /// Create a warning without a tip.
    pub fn new(capability: Capability, headline: String, detail: String) -> Self {
        Self {
            capability,
            severity: Severity::Warning,
            headline,
            detail,
            tip: None,
        }
    }

    /// Attach a tip.
    pub fn with_tip(mut self, tip: Option<&str>) -> Self {
        self.tip = tip.map(str::to_string);
        self
    }
}
