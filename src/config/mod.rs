//! Configuration loading for devdoctor.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use devdoctor::config::load_config_file;
//! use devdoctor::host::Persona;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "persona: legacy").unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! assert_eq!(config.persona, Some(Persona::LegacyProduct));
//! ```
//!
//! # Configuration File Locations
//!
//! An explicit `--config` path wins. Otherwise `~/.devdoctor/config.yml`
//! is used when it exists. Command-line flags and `DEVDOCTOR_PERSONA`
//! override file values.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, user_config_path};
pub use schema::DoctorConfig;
