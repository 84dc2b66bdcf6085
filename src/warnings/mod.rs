//! Doctor warning composition.
//!
//! Turns a [`CapabilitySnapshot`](crate::capabilities::CapabilitySnapshot),
//! a [`Persona`](crate::host::Persona) and a [`Platform`](crate::host::Platform)
//! into an ordered list of [`Warning`]s. This is a pure transform: it does
//! no detection and no I/O.
//!
//! # Modules
//!
//! - [`types`] - Warning records
//! - [`rules`] - The ordered rule table and its gates
//! - [`messages`] - Headline and remediation text per capability
//! - [`tips`] - Package manager tips per platform
//! - [`composer`] - Rule evaluation
//!
//! # Example
//!
//! ```
//! use devdoctor::capabilities::CapabilitySnapshot;
//! use devdoctor::host::{Persona, Platform};
//! use devdoctor::warnings::{compose, Capability};
//!
//! let snapshot = CapabilitySnapshot::complete().with_java(None);
//! let warnings = compose(&snapshot, Persona::PrimaryProduct, Platform::Other);
//! assert_eq!(warnings.len(), 1);
//! assert_eq!(warnings[0].capability, Capability::Java);
//! ```

pub mod composer;
pub mod messages;
pub mod rules;
pub mod tips;
pub mod types;

pub use composer::{compose, compose_with, TipPolicy};
pub use rules::{PersonaGate, PlatformGate, Rule, RULES};
pub use tips::package_manager_tip;
pub use types::{Capability, Severity, Warning};
