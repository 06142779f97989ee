//! Command dispatch logic for facnet

use std::time::Instant;

use crate::cli::paths::resolve_root_path;
use crate::cli::Cli;
use facnet_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod macros;

pub use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = resolve_root_path(cli.root.clone());

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
