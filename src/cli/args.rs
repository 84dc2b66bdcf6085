//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::host::{Persona, Platform};

/// devdoctor - Checks the host for the toolchain a mobile CLI depends on.
#[derive(Debug, Parser)]
#[command(name = "devdoctor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.devdoctor/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Also list every detected capability
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print warning headlines only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Check arguments used when no subcommand is given
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the host toolchain (default if no command specified)
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Product variant whose guidance applies
    #[arg(long, value_enum, ignore_case = true, env = "DEVDOCTOR_PERSONA")]
    pub persona: Option<Persona>,

    /// Report for another platform (windows, darwin, other)
    #[arg(long, hide = true)]
    pub platform: Option<Platform>,

    /// Read capabilities from a JSON snapshot instead of probing the host
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the package manager tip only once
    #[arg(long)]
    pub tip_once: bool,

    /// Exit with code 1 when any warning is reported
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
