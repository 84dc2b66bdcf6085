//! Check command implementation.
//!
//! The `devdoctor check` command acquires a capability snapshot, composes
//! warnings for the active persona and platform, and prints them.

use tracing::debug;

use crate::capabilities::{JsonSnapshotFile, SnapshotProvider, SystemProbe};
use crate::cli::args::CheckArgs;
use crate::config::DoctorConfig;
use crate::error::Result;
use crate::host::{Persona, Platform};
use crate::ui::{render_json, render_report, Report, UserInterface};
use crate::warnings::{compose_with, TipPolicy};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    config: DoctorConfig,
    host_platform: Platform,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, config: DoctorConfig, host_platform: Platform) -> Self {
        Self {
            args,
            config,
            host_platform,
        }
    }

    /// Persona from flag or env, then config, then the default.
    pub fn persona(&self) -> Persona {
        self.args.persona.or(self.config.persona).unwrap_or_default()
    }

    /// Platform override from flag, then config, then the detected host.
    pub fn platform(&self) -> Platform {
        self.args
            .platform
            .or(self.config.platform)
            .unwrap_or(self.host_platform)
    }

    pub fn tip_policy(&self) -> TipPolicy {
        if self.args.tip_once {
            TipPolicy::Once
        } else {
            self.config.tip_policy
        }
    }

    fn provider(&self, platform: Platform) -> Box<dyn SnapshotProvider> {
        match &self.args.snapshot {
            Some(path) => Box::new(JsonSnapshotFile::new(path)),
            None => Box::new(SystemProbe::new(platform)),
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let persona = self.persona();
        let platform = self.platform();
        let provider = self.provider(platform);
        debug!(
            "Checking as {} on {} with {} provider",
            persona,
            platform,
            provider.name()
        );

        let snapshot = provider.snapshot()?;
        let warnings = compose_with(&snapshot, persona, platform, self.tip_policy());
        let report = Report::new(persona, platform, snapshot, warnings);

        if self.args.json {
            ui.output(&render_json(&report)?);
        } else {
            render_report(&report, ui);
        }

        if self.args.strict && report.has_warnings() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
