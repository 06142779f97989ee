//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::resolve_against;
use crate::cli::Cli;
use facnet_core::error::Result;
use facnet_core::graph::Network;
use facnet_core::store::NetworkStore;

use super::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, start: Instant) -> Self {
        Self { cli, root, start }
    }

    /// Open `--store` when given, otherwise discover from the root
    pub fn discover_or_open_store(&self) -> Result<NetworkStore> {
        match &self.cli.store {
            Some(path) => NetworkStore::open(&resolve_against(self.root, path)),
            None => NetworkStore::discover(self.root),
        }
    }

    /// Open the store and load its network
    pub fn load_network(&self) -> Result<(NetworkStore, Network)> {
        let store = self.discover_or_open_store()?;
        let network = store.load()?;
        trace_command!(self.cli, self.start, "load_network");
        Ok((store, network))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("facnet {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Routing queries over a network of facilities.");
        println!();
        println!("Run `facnet --help` for usage information.");
        Ok(())
    }
}
