//! Snapshot providers.
//!
//! A provider returns an already-resolved snapshot. The composer never
//! re-queries or retries a provider.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DoctorError, Result};

use super::snapshot::CapabilitySnapshot;

/// Anything able to produce a [`CapabilitySnapshot`] for the current host.
pub trait SnapshotProvider {
    /// Short name for logging.
    fn name(&self) -> &str;

    /// Produce the snapshot.
    fn snapshot(&self) -> Result<CapabilitySnapshot>;
}

/// Provider that hands out a fixed snapshot.
#[derive(Debug, Clone)]
pub struct StaticSnapshot {
    snapshot: CapabilitySnapshot,
}

impl StaticSnapshot {
    pub fn new(snapshot: CapabilitySnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotProvider for StaticSnapshot {
    fn name(&self) -> &str {
        "static"
    }

    fn snapshot(&self) -> Result<CapabilitySnapshot> {
        Ok(self.snapshot.clone())
    }
}

/// Provider that reads a snapshot previously captured as JSON.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl SnapshotProvider for JsonSnapshotFile {
    fn name(&self) -> &str {
        "json-file"
    }

    fn snapshot(&self) -> Result<CapabilitySnapshot> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DoctorError::SnapshotNotFound {
                    path: self.path.clone(),
                }
            } else {
                DoctorError::Io(e)
            }
        })?;

        serde_json::from_str(&content).map_err(|e| DoctorError::SnapshotParseError {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn static_snapshot_returns_clone() {
        let snapshot = CapabilitySnapshot::complete().with_java(None);
        let provider = StaticSnapshot::new(snapshot.clone());
        assert_eq!(provider.snapshot().unwrap(), snapshot);
        assert_eq!(provider.name(), "static");
    }

    #[test]
    fn json_file_reads_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("facts.json");
        fs::write(
            &path,
            r#"{"adbVersion": "1.0.41", "androidSdkInstalled": true}"#,
        )
        .unwrap();

        let snapshot = JsonSnapshotFile::new(&path).snapshot().unwrap();
        assert_eq!(snapshot.adb_version.as_deref(), Some("1.0.41"));
        assert!(snapshot.android_sdk_installed);
        assert!(snapshot.java_version.is_none());
    }

    #[test]
    fn json_file_missing_is_snapshot_not_found() {
        let temp = TempDir::new().unwrap();
        let provider = JsonSnapshotFile::new(&temp.path().join("nope.json"));
        let err = provider.snapshot().unwrap_err();
        assert!(matches!(err, DoctorError::SnapshotNotFound { .. }));
    }

    #[test]
    fn json_file_invalid_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonSnapshotFile::new(&path).snapshot().unwrap_err();
        assert!(matches!(err, DoctorError::SnapshotParseError { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
