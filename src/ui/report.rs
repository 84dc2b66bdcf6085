//! Rendering of doctor results.

use serde::Serialize;

use crate::capabilities::CapabilitySnapshot;
use crate::error::{DoctorError, Result};
use crate::host::{Persona, Platform};
use crate::warnings::Warning;

use super::UserInterface;

/// Printed when no rule fired.
pub const NO_ISSUES: &str = "No issues were detected.";

/// Everything the presentation layer needs from one doctor run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub persona: Persona,
    pub platform: Platform,
    pub snapshot: CapabilitySnapshot,
    pub warnings: Vec<Warning>,
}

impl Report {
    pub fn new(
        persona: Persona,
        platform: Platform,
        snapshot: CapabilitySnapshot,
        warnings: Vec<Warning>,
    ) -> Self {
        Self {
            persona,
            platform,
            snapshot,
            warnings,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Render a report as human-readable text.
///
/// Each warning is its headline, then its remediation lines, then its tip.
/// Quiet mode prints headlines only.
pub fn render_report(report: &Report, ui: &mut dyn UserInterface) {
    let mode = ui.output_mode();

    if mode.shows_facts() {
        ui.show_header(&format!(
            "{} doctor · {}",
            report.persona.product_name(),
            report.platform
        ));
        for (label, value) in facts(&report.snapshot) {
            ui.message(&format!("  {:<12} {}", label, value));
        }
        ui.message("");
    }

    if !report.has_warnings() {
        ui.success(NO_ISSUES);
        return;
    }

    for warning in &report.warnings {
        ui.warning(&warning.headline);
        if !mode.shows_details() {
            continue;
        }
        for line in warning.detail.lines() {
            ui.message(line);
        }
        if let Some(tip) = &warning.tip {
            ui.hint(tip);
        }
        ui.message("");
    }
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| DoctorError::Other(e.into()))
}

fn facts(snapshot: &CapabilitySnapshot) -> Vec<(&'static str, String)> {
    let version = |v: &Option<String>| v.clone().unwrap_or_else(|| "not detected".to_string());
    let installed = |b: bool| {
        if b {
            "installed".to_string()
        } else {
            "not detected".to_string()
        }
    };

    vec![
        ("adb", version(&snapshot.adb_version)),
        ("ant", version(&snapshot.ant_version)),
        ("android-sdk", installed(snapshot.android_sdk_installed)),
        ("xcode", version(&snapshot.xcode_version)),
        ("itunes", installed(snapshot.itunes_installed)),
        ("java", version(&snapshot.java_version)),
    ]
}
