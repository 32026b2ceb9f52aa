//! Command dispatch logic for mazewalk

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use mazewalk_core::error::Result;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(elapsed = ?start.elapsed(), "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Generate(args) => commands::generate::execute(ctx, args),
            Commands::Path(args) => commands::path::execute(ctx, args),
            Commands::Battery(args) => commands::battery::execute(ctx, args),
        }
    }
}
