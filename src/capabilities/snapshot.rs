//! Capability snapshot record.

use serde::{Deserialize, Serialize};

/// Facts about installed third-party tooling on the host.
///
/// An absent version means "not detected". Detection errors and genuinely
/// missing tools are not distinguished.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapabilitySnapshot {
    /// Android debug bridge version.
    pub adb_version: Option<String>,
    /// Apache Ant version.
    pub ant_version: Option<String>,
    /// Whether an Android SDK installation was found.
    pub android_sdk_installed: bool,
    /// Xcode version. Only probed on Darwin.
    pub xcode_version: Option<String>,
    /// Whether iTunes (or the Apple device stack) is installed.
    pub itunes_installed: bool,
    /// JDK version.
    pub java_version: Option<String>,
}

impl CapabilitySnapshot {
    /// A snapshot where nothing was detected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A snapshot where every capability was detected.
    pub fn complete() -> Self {
        Self {
            adb_version: Some("1.0.32".to_string()),
            ant_version: Some("1.9.4".to_string()),
            android_sdk_installed: true,
            xcode_version: Some("7.0".to_string()),
            itunes_installed: true,
            java_version: Some("1.8.0_60".to_string()),
        }
    }

    pub fn with_adb(mut self, version: Option<&str>) -> Self {
        self.adb_version = version.map(str::to_string);
        self
    }

    pub fn with_ant(mut self, version: Option<&str>) -> Self {
        self.ant_version = version.map(str::to_string);
        self
    }

    pub fn with_android_sdk(mut self, installed: bool) -> Self {
        self.android_sdk_installed = installed;
        self
    }

    pub fn with_xcode(mut self, version: Option<&str>) -> Self {
        self.xcode_version = version.map(str::to_string);
        self
    }

    pub fn with_itunes(mut self, installed: bool) -> Self {
        self.itunes_installed = installed;
        self
    }

    pub fn with_java(mut self, version: Option<&str>) -> Self {
        self.java_version = version.map(str::to_string);
        self
    }
}
