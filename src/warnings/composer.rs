//! Rule evaluation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capabilities::CapabilitySnapshot;
use crate::host::{Persona, Platform};

use super::messages;
use super::rules::RULES;
use super::tips::package_manager_tip;
use super::types::Warning;

/// How often the package manager tip is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TipPolicy {
    /// After every tip-eligible warning.
    #[default]
    PerWarning,
    /// Only after the first tip-eligible warning.
    Once,
}

/// Compose doctor warnings, repeating the tip after every tip-eligible warning.
///
/// Warnings come out in rule table order. Calling this twice with the same
/// inputs yields equal output.
pub fn compose(
    snapshot: &CapabilitySnapshot,
    persona: Persona,
    platform: Platform,
) -> Vec<Warning> {
    compose_with(snapshot, persona, platform, TipPolicy::PerWarning)
}

/// Compose doctor warnings with an explicit tip policy.
pub fn compose_with(
    snapshot: &CapabilitySnapshot,
    persona: Persona,
    platform: Platform,
    policy: TipPolicy,
) -> Vec<Warning> {
    let tip = package_manager_tip(platform);
    let mut tip_given = false;
    let mut warnings = Vec::new();

    for rule in RULES {
        if !rule.applies_to(persona, platform) || !rule.fires(snapshot) {
            continue;
        }
        debug!("Rule '{}' fired", rule.capability);

        let mut warning = Warning::new(
            rule.capability,
            messages::headline(rule.capability).to_string(),
            messages::detail(rule.capability, persona),
        );

        if rule.tip_eligible {
            let attach = match policy {
                TipPolicy::PerWarning => true,
                TipPolicy::Once => !tip_given,
            };
            if attach {
                warning = warning.with_tip(tip);
                tip_given = true;
            }
        }

        warnings.push(warning);
    }

    warnings
}
