//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod check;
pub mod completions;
pub mod dispatcher;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
