//! Error types for devdoctor operations.
//!
//! This module defines [`DoctorError`], the error type used by everything
//! around the warning composer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Composing warnings never fails; only acquiring inputs can
//! - Use `DoctorError` for config and snapshot failures that need distinct handling
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devdoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// Configuration file not found at the given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Snapshot file not found at the given location.
    #[error("Capability snapshot not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    /// Failed to parse a capability snapshot file.
    #[error("Failed to parse capability snapshot at {path}: {message}")]
    SnapshotParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for devdoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
