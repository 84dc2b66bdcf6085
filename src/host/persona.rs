//! CLI product variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which product variant of the CLI is executing.
///
/// Selects the subset of doctor rules that apply and the product name
/// used in guidance text. Fixed for the life of the process.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Persona {
    /// The current CLI. Sees every rule.
    #[default]
    #[serde(rename = "primary")]
    #[value(name = "primary")]
    PrimaryProduct,
    /// The legacy cloud-build CLI. Never builds locally, so Ant and Xcode
    /// checks do not apply.
    #[serde(rename = "legacy")]
    #[value(name = "legacy")]
    LegacyProduct,
}

impl Persona {
    /// All personas, in declaration order.
    pub const ALL: [Persona; 2] = [Persona::PrimaryProduct, Persona::LegacyProduct];

    /// Display name of the CLI, as used in guidance text.
    pub fn product_name(&self) -> &'static str {
        match self {
            Persona::PrimaryProduct => "NativeScript CLI",
            Persona::LegacyProduct => "AppBuilder CLI",
        }
    }

    /// Identifier used in config files, env vars and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::PrimaryProduct => "primary",
            Persona::LegacyProduct => "legacy",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Self::PrimaryProduct),
            "legacy" => Ok(Self::LegacyProduct),
            _ => Err(format!("unknown persona: {}", s)),
        }
    }
}
