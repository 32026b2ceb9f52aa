//! CLI argument parsing for mazewalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --seed, --max-steps, --dead-ends, --root

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mazewalk_core::walk::{DeadEndPolicy, RootSelection};
pub use args::{BatteryArgs, GenerateArgs, PathArgs};
pub use mazewalk_core::format::OutputFormat;
use parse::{parse_dead_end_policy, parse_output_format, parse_root_selection};

/// Mazewalk - perfect maze generator using loop-erased random walks
#[derive(Parser, Debug)]
#[command(name = "mazewalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "MAZEWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for the random walk (random when omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Step budget for a whole walk run
    #[arg(long, global = true)]
    pub max_steps: Option<u64>,

    /// Dead-end handling: fail or backtrack
    #[arg(long, global = true, value_parser = parse_dead_end_policy)]
    pub dead_ends: Option<DeadEndPolicy>,

    /// Root selection: first-loop or first-node
    #[arg(long, global = true, value_parser = parse_root_selection)]
    pub root: Option<RootSelection>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate and render a maze
    Generate(GenerateArgs),

    /// Generate a maze and find the path between two cells
    Path(PathArgs),

    /// Run the built-in sweep of maze sizes
    Battery(BatteryArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mazewalk",
            "generate",
            "4",
            "3",
            "--seed",
            "9",
            "--dead-ends",
            "backtrack",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.dead_ends, Some(DeadEndPolicy::Backtrack));
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!((args.width, args.height), (4, 3));
                assert!(!args.connections);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_dimension() {
        let err = Cli::try_parse_from(["mazewalk", "generate", "4"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_path_cells() {
        let cli = Cli::try_parse_from(["mazewalk", "path", "5", "5", "--from", "1,2"]).unwrap();
        match cli.command {
            Some(Commands::Path(args)) => {
                assert_eq!(args.from, Some((1, 2)));
                assert_eq!(args.to, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
