//! `mazewalk path` command - corridor path between two cells

use tracing::debug;

use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::generate::build_maze;
use crate::commands::json_builders::{build_cell_json, build_stats_json};
use mazewalk_core::error::Result;
use mazewalk_core::graph::GraphProvider;

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let cli = ctx.cli;
    let settings = ctx.settings()?;

    let from = args.from.unwrap_or((0, 0));
    let to = args
        .to
        .unwrap_or((args.width.saturating_sub(1), args.height.saturating_sub(1)));

    let maze = build_maze(&settings, args.width, args.height)?;
    let result = maze.find_path(from, to)?;
    debug!(
        elapsed = ?ctx.start.elapsed(),
        found = result.found,
        length = result.path.len(),
        "path"
    );

    match cli.format {
        OutputFormat::Json => {
            let path: Vec<_> = result
                .path
                .iter()
                .map(|&id| build_cell_json(&maze, id))
                .collect();
            let json = serde_json::json!({
                "width": args.width,
                "height": args.height,
                "seed": settings.seed,
                "from": [from.0, from.1],
                "to": [to.0, to.1],
                "found": result.found,
                "path": path,
                "stats": build_stats_json(&maze.stats)?,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "path {} x {} (seed {})",
                    args.width, args.height, settings.seed
                );
            }
            if args.render {
                print!("{}", maze.render()?);
                println!("{}", maze.stats);
            }
            println!("{}", result.found);
            let labels: Vec<String> = result
                .path
                .iter()
                .filter_map(|&id| maze.grid.label(id))
                .map(|label| label.to_string())
                .collect();
            println!("{}", labels.join(" "));
        }
    }

    Ok(())
}
