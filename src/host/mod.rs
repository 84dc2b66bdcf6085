//! Host identity captured once at process start.
//!
//! # Modules
//!
//! - [`platform`] - Coarse operating system classification
//! - [`persona`] - Which product variant of the CLI is running

pub mod persona;
pub mod platform;

pub use persona::Persona;
pub use platform::Platform;
