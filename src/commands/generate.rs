//! `mazewalk generate` command - build, verify and render one maze

use tracing::debug;

use crate::cli::{GenerateArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::build_maze_json;
use crate::commands::settings::RunSettings;
use mazewalk_core::error::Result;
use mazewalk_core::generator::{Maze, MazeGenerator};
use mazewalk_core::render::render_connections;
use mazewalk_core::walk::seeded_rng;

/// Generate a maze with a fresh picker seeded from `settings`
pub fn build_maze(settings: &RunSettings, width: usize, height: usize) -> Result<Maze> {
    let mut rng = seeded_rng(settings.seed);
    MazeGenerator::new(settings.options).generate(width, height, &mut rng)
}

/// Execute the generate command
pub fn execute(ctx: &CommandContext, args: &GenerateArgs) -> Result<()> {
    let cli = ctx.cli;
    let settings = ctx.settings()?;

    let maze = build_maze(&settings, args.width, args.height)?;
    debug!(elapsed = ?ctx.start.elapsed(), "generate");

    match cli.format {
        OutputFormat::Json => {
            let mut json = build_maze_json(&maze, settings.seed)?;
            if args.connections {
                json["connections"] = serde_json::json!(render_connections(&maze.grid)
                    .lines()
                    .collect::<Vec<_>>());
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "generate {} x {} (seed {})",
                    args.width, args.height, settings.seed
                );
            }
            if args.connections {
                print!("{}", render_connections(&maze.grid));
            }
            print!("{}", maze.render()?);
            println!("{}", maze.stats);
        }
    }

    Ok(())
}
