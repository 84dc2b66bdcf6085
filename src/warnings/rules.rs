//! The doctor rule table.
//!
//! Rules are evaluated in table order and that order is the output order.
//! No rule looks at another rule's outcome.

use crate::capabilities::CapabilitySnapshot;
use crate::host::{Persona, Platform};

use super::types::Capability;

/// Which personas a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonaGate {
    All,
    Only(Persona),
}

impl PersonaGate {
    pub fn admits(&self, persona: Persona) -> bool {
        match self {
            PersonaGate::All => true,
            PersonaGate::Only(only) => *only == persona,
        }
    }
}

/// Which platforms a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformGate {
    Any,
    Only(Platform),
}

impl PlatformGate {
    pub fn admits(&self, platform: Platform) -> bool {
        match self {
            PlatformGate::Any => true,
            PlatformGate::Only(only) => *only == platform,
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Capability whose absence this rule reports.
    pub capability: Capability,
    pub personas: PersonaGate,
    pub platforms: PlatformGate,
    /// Whether a firing is followed by the platform's package manager tip.
    pub tip_eligible: bool,
}

impl Rule {
    /// Whether the persona and platform gates both pass.
    pub fn applies_to(&self, persona: Persona, platform: Platform) -> bool {
        self.personas.admits(persona) && self.platforms.admits(platform)
    }

    /// Whether the snapshot reports this rule's capability as not detected.
    pub fn fires(&self, snapshot: &CapabilitySnapshot) -> bool {
        match self.capability {
            Capability::Adb => snapshot.adb_version.is_none(),
            Capability::Ant => snapshot.ant_version.is_none(),
            Capability::AndroidSdk => !snapshot.android_sdk_installed,
            Capability::Xcode => snapshot.xcode_version.is_none(),
            Capability::Itunes => !snapshot.itunes_installed,
            Capability::Java => snapshot.java_version.is_none(),
        }
    }
}

/// Doctor rules, in output order.
pub const RULES: &[Rule] = &[
    Rule {
        capability: Capability::Adb,
        personas: PersonaGate::All,
        platforms: PlatformGate::Any,
        tip_eligible: true,
    },
    Rule {
        capability: Capability::Ant,
        personas: PersonaGate::Only(Persona::PrimaryProduct),
        platforms: PlatformGate::Any,
        tip_eligible: true,
    },
    Rule {
        capability: Capability::AndroidSdk,
        personas: PersonaGate::All,
        platforms: PlatformGate::Any,
        tip_eligible: true,
    },
    Rule {
        capability: Capability::Xcode,
        personas: PersonaGate::Only(Persona::PrimaryProduct),
        platforms: PlatformGate::Only(Platform::Darwin),
        tip_eligible: false,
    },
    Rule {
        capability: Capability::Itunes,
        personas: PersonaGate::All,
        platforms: PlatformGate::Any,
        tip_eligible: false,
    },
    Rule {
        capability: Capability::Java,
        personas: PersonaGate::All,
        platforms: PlatformGate::Any,
        tip_eligible: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_fixed() {
        let order: Vec<Capability> = RULES.iter().map(|r| r.capability).collect();
        assert_eq!(
            order,
            vec![
                Capability::Adb,
                Capability::Ant,
                Capability::AndroidSdk,
                Capability::Xcode,
                Capability::Itunes,
                Capability::Java,
            ]
        );
    }

    #[test]
    fn only_android_rules_are_tip_eligible() {
        let eligible: Vec<Capability> = RULES
            .iter()
            .filter(|r| r.tip_eligible)
            .map(|r| r.capability)
            .collect();
        assert_eq!(
            eligible,
            vec![Capability::Adb, Capability::Ant, Capability::AndroidSdk]
        );
    }

    #[test]
    fn persona_gate_admits() {
        assert!(PersonaGate::All.admits(Persona::LegacyProduct));
        assert!(PersonaGate::Only(Persona::PrimaryProduct).admits(Persona::PrimaryProduct));
        assert!(!PersonaGate::Only(Persona::PrimaryProduct).admits(Persona::LegacyProduct));
    }

    #[test]
    fn platform_gate_admits() {
        assert!(PlatformGate::Any.admits(Platform::Windows));
        assert!(PlatformGate::Only(Platform::Darwin).admits(Platform::Darwin));
        assert!(!PlatformGate::Only(Platform::Darwin).admits(Platform::Other));
    }

    #[test]
    fn every_rule_fires_on_empty_snapshot() {
        let snapshot = CapabilitySnapshot::empty();
        assert!(RULES.iter().all(|r| r.fires(&snapshot)));
    }

    #[test]
    fn no_rule_fires_on_complete_snapshot() {
        let snapshot = CapabilitySnapshot::complete();
        assert!(RULES.iter().all(|r| !r.fires(&snapshot)));
    }

    #[test]
    fn xcode_rule_applies_only_to_primary_on_darwin() {
        let xcode = RULES
            .iter()
            .find(|r| r.capability == Capability::Xcode)
            .unwrap();
        assert!(xcode.applies_to(Persona::PrimaryProduct, Platform::Darwin));
        assert!(!xcode.applies_to(Persona::LegacyProduct, Platform::Darwin));
        assert!(!xcode.applies_to(Persona::PrimaryProduct, Platform::Windows));
    }
}
