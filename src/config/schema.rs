//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::host::{Persona, Platform};
use crate::ui::OutputMode;
use crate::warnings::TipPolicy;

/// Root configuration structure for `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoctorConfig {
    /// Product variant whose messaging applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<Persona>,

    /// Platform to report for instead of the detected one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    /// How often package manager tips are shown
    pub tip_policy: TipPolicy,

    /// Default output verbosity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}
