//! devdoctor - Post-install toolchain doctor for a mobile development CLI.
//!
//! devdoctor inspects the host for the third-party tooling the CLI relies
//! on (Android SDK, adb, Ant, JDK, Xcode, iTunes) and prints warnings with
//! remediation guidance for whatever is missing.
//!
//! # Modules
//!
//! - [`capabilities`] - Capability snapshot and the providers that produce it
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`host`] - Platform and persona identification
//! - [`ui`] - Terminal output and report rendering
//! - [`warnings`] - The rule table and warning composer
//!
//! # Example
//!
//! ```
//! use devdoctor::capabilities::CapabilitySnapshot;
//! use devdoctor::host::{Persona, Platform};
//! use devdoctor::warnings::compose;
//!
//! let snapshot = CapabilitySnapshot::complete().with_adb(None);
//! let warnings = compose(&snapshot, Persona::LegacyProduct, Platform::Windows);
//! assert_eq!(warnings.len(), 1);
//! assert!(warnings[0].tip.as_deref().unwrap().contains("chocolatey"));
//! ```

pub mod capabilities;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod ui;
pub mod warnings;

pub use error::{DoctorError, Result};
