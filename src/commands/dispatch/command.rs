//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use crate::commands::settings::RunSettings;
use mazewalk_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn settings(&self) -> Result<RunSettings> {
        RunSettings::resolve(self.cli)
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
        println!("mazewalk {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Perfect maze generator using loop-erased random walks.");
        println!();
        println!("Run `mazewalk --help` for usage information.");
        Ok(())
    }
}
