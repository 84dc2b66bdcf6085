//! Detected toolchain capabilities of the host.
//!
//! The warning composer only reads a [`CapabilitySnapshot`]; producing one
//! is the job of a [`SnapshotProvider`].
//!
//! # Modules
//!
//! - [`snapshot`] - The immutable capability record
//! - [`provider`] - Provider trait plus static and file-backed providers
//! - [`probe`] - Best-effort inspection of the real host

pub mod probe;
pub mod provider;
pub mod snapshot;

pub use probe::SystemProbe;
pub use provider::{JsonSnapshotFile, SnapshotProvider, StaticSnapshot};
pub use snapshot::CapabilitySnapshot;
