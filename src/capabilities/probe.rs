//! Best-effort host inspection.
//!
//! `SystemProbe` resolves each tool on PATH itself before running it, so a
//! missing binary never costs a process spawn. Any failure while probing a
//! capability collapses to "not detected". A tool that runs successfully but
//! prints no version is reported as [`UNKNOWN_VERSION`].
//!
//! # Example
//!
//! ```no_run
//! use devdoctor::capabilities::{SnapshotProvider, SystemProbe};
//! use devdoctor::host::Platform;
//!
//! let probe = SystemProbe::new(Platform::current());
//! let snapshot = probe.snapshot().unwrap();
//! println!("adb: {:?}", snapshot.adb_version);
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::Result;
use crate::host::Platform;

use super::provider::SnapshotProvider;
use super::snapshot::CapabilitySnapshot;

/// Applications that provide the Apple device stack on Darwin.
const DARWIN_ITUNES_PATHS: &[&str] = &[
    "/Applications/iTunes.app",
    "/System/Applications/Music.app",
];

/// Version reported for a tool that ran but printed nothing recognizable.
pub const UNKNOWN_VERSION: &str = "unknown";

/// Environment variables naming Program Files roots on Windows.
const WINDOWS_PROGRAM_FILES_VARS: &[&str] = &["ProgramFiles", "ProgramFiles(x86)"];

/// Environment variables naming an Android SDK root.
const ANDROID_SDK_VARS: &[&str] = &["ANDROID_HOME", "ANDROID_SDK_ROOT"];

/// Host environment values the probe depends on, captured once.
#[derive(Debug, Clone, Default)]
struct HostEnv {
    path: Vec<PathBuf>,
    android_sdk_roots: Vec<PathBuf>,
    program_files: Vec<PathBuf>,
}

impl HostEnv {
    fn capture<F>(env_fn: &F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        let path: Vec<PathBuf> = env_fn("PATH")
            .map(|p| std::env::split_paths(&p).collect())
            .unwrap_or_default();
        let lookup = |vars: &[&str]| -> Vec<PathBuf> {
            vars.iter()
                .filter_map(|var| env_fn(*var).ok())
                .filter(|val| !val.is_empty())
                .map(PathBuf::from)
                .collect()
        };

        Self {
            path,
            android_sdk_roots: lookup(ANDROID_SDK_VARS),
            program_files: lookup(WINDOWS_PROGRAM_FILES_VARS),
        }
    }
}

/// Inspects the real host to build a [`CapabilitySnapshot`].
#[derive(Debug, Clone)]
pub struct SystemProbe {
    platform: Platform,
    env: HostEnv,
}

impl SystemProbe {
    /// Probe using the actual process environment.
    pub fn new(platform: Platform) -> Self {
        Self::with_env(platform, |key: &str| std::env::var(key))
    }

    /// Probe with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_env<F>(platform: Platform, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
    {
        Self {
            platform,
            env: HostEnv::capture(&env_fn),
        }
    }

    fn probe_adb(&self) -> Option<String> {
        self.tool_version("adb", &["version"])
    }

    fn probe_ant(&self) -> Option<String> {
        self.tool_version("ant", &["-version"])
    }

    fn probe_java(&self) -> Option<String> {
        self.tool_version("java", &["-version"])
    }

    fn probe_xcode(&self) -> Option<String> {
        if self.platform != Platform::Darwin {
            return None;
        }
        self.tool_version("xcodebuild", &["-version"])
    }

    fn probe_android_sdk(&self) -> bool {
        if self.env.android_sdk_roots.iter().any(|root| root.is_dir()) {
            return true;
        }
        ["sdkmanager", "android"]
            .iter()
            .any(|tool| resolve_tool_path(*tool, &self.env.path).is_some())
    }

    fn probe_itunes(&self) -> bool {
        match self.platform {
            Platform::Darwin => DARWIN_ITUNES_PATHS.iter().any(|p| Path::new(p).exists()),
            Platform::Windows => self
                .env
                .program_files
                .iter()
                .any(|root| root.join("iTunes").join("iTunes.exe").is_file()),
            Platform::Other => false,
        }
    }

    /// Run `tool args..` and extract a version from its output.
    ///
    /// Some tools (java) report their version on stderr, so both streams
    /// are inspected.
    fn tool_version(&self, tool: &str, args: &[&str]) -> Option<String> {
        let Some(binary) = resolve_tool_path(tool, &self.env.path) else {
            debug!("{} not found on PATH", tool);
            return None;
        };

        let output = match Command::new(&binary).args(args).output() {
            Ok(output) => output,
            Err(e) => {
                debug!("Failed to run {}: {}", binary.display(), e);
                return None;
            }
        };

        if !output.status.success() {
            debug!("{} exited with {:?}", binary.display(), output.status.code());
            return None;
        }

        let text = format!(
            "{}\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        let version = extract_version(&text)
            .or_else(|| first_line(&text))
            .unwrap_or_else(|| UNKNOWN_VERSION.to_string());
        debug!("{} version: {}", tool, version);
        Some(version)
    }
}

impl SnapshotProvider for SystemProbe {
    fn name(&self) -> &str {
        "system"
    }

    fn snapshot(&self) -> Result<CapabilitySnapshot> {
        let snapshot = CapabilitySnapshot {
            adb_version: self.probe_adb(),
            ant_version: self.probe_ant(),
            android_sdk_installed: self.probe_android_sdk(),
            xcode_version: self.probe_xcode(),
            itunes_installed: self.probe_itunes(),
            java_version: self.probe_java(),
        };
        debug!("Probed capabilities: {:?}", snapshot);
        Ok(snapshot)
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// File names a tool may have on this target.
fn candidate_names(tool: &str) -> Vec<String> {
    if cfg!(windows) {
        ["exe", "bat", "cmd"]
            .iter()
            .map(|ext| format!("{}.{}", tool, ext))
            .chain(std::iter::once(tool.to_string()))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Extract a version number from tool output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [
        r"(\d+\.\d+\.\d+(?:_\d+)?)",
        r"version\s+(\d+\.\d+)",
        r"v(\d+\.\d+)",
        r"(\d+\.\d+)",
    ];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}

fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
