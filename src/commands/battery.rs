//! `mazewalk battery` command - generate and verify mazes across many sizes
//!
//! The sweep runs three fixed cases (10x10 with its connections, 40x20, and
//! 20x40 with a corner-to-corner path), then the narrow strips 2 x y and
//! x x 2, then every x x y with both sides from 3 up to `--max-size`.
//! A single picker seeded once drives every maze in the sweep.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::cli::{BatteryArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::json_builders::build_stats_json;
use mazewalk_core::bail_invalid;
use mazewalk_core::error::{MazeError, Result};
use mazewalk_core::generator::{Maze, MazeGenerator};
use mazewalk_core::graph::GraphProvider;
use mazewalk_core::render::render_connections;
use mazewalk_core::walk::seeded_rng;

/// Upper bound accepted for `--max-size`
pub const MAX_SWEEP_SIZE: usize = 1024;

/// One maze size in the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryCase {
    pub width: usize,
    pub height: usize,
}

impl BatteryCase {
    fn new(width: usize, height: usize) -> Self {
        BatteryCase { width, height }
    }
}

/// Every case of the sweep, in run order
pub fn battery_cases(max_size: usize) -> Vec<BatteryCase> {
    let mut cases = vec![
        BatteryCase::new(10, 10),
        BatteryCase::new(40, 20),
        BatteryCase::new(20, 40),
    ];
    cases.extend((2..max_size).map(|y| BatteryCase::new(2, y)));
    cases.extend((2..max_size).map(|x| BatteryCase::new(x, 2)));
    for y in 3..max_size {
        cases.extend((3..max_size).map(|x| BatteryCase::new(x, y)));
    }
    cases
}

/// Execute the battery command
pub fn execute(ctx: &CommandContext, args: &BatteryArgs) -> Result<()> {
    let cli = ctx.cli;
    if args.max_size > MAX_SWEEP_SIZE {
        bail_invalid!(
            "--max-size",
            format!("{} (at most {})", args.max_size, MAX_SWEEP_SIZE)
        );
    }
    let settings = ctx.settings()?;
    let generator = MazeGenerator::new(settings.options);
    let mut rng = seeded_rng(settings.seed);

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let cases = battery_cases(args.max_size);
    let human = cli.format == OutputFormat::Human;
    if human && !cli.quiet {
        println!("battery: {} mazes (seed {})", cases.len(), settings.seed);
    }

    let mut results = Vec::with_capacity(cases.len());
    let mut corner_path = serde_json::Value::Null;

    for (index, case) in cases.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            info!(completed = index, total = cases.len(), "battery interrupted");
            return Err(MazeError::Interrupted);
        }

        let maze = generator.generate(case.width, case.height, &mut rng)?;

        if human {
            println!("{} x {}", case.width, case.height);
            if args.render {
                if index == 0 {
                    print!("{}", render_connections(&maze.grid));
                }
                print!("{}", maze.render()?);
            }
            println!("{}", maze.stats);
        }

        if *case == BatteryCase::new(20, 40) {
            corner_path = report_corner_path(&maze, human)?;
        }

        results.push(serde_json::json!({
            "width": case.width,
            "height": case.height,
            "stats": build_stats_json(&maze.stats)?,
        }));
    }

    debug!(elapsed = ?ctx.start.elapsed(), mazes = results.len(), "battery");

    if !human {
        let json = serde_json::json!({
            "seed": settings.seed,
            "mazes": results.len(),
            "corner_path": corner_path,
            "cases": results,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    }

    Ok(())
}

/// Walk from the top-left to the bottom-right cell, printing the result
fn report_corner_path(maze: &Maze, human: bool) -> Result<serde_json::Value> {
    let far = (maze.grid.columns() - 1, maze.grid.rows() - 1);
    let result = maze.find_path((0, 0), far)?;

    if human {
        println!("{}", result.found);
        let labels: Vec<String> = result
            .path
            .iter()
            .filter_map(|&id| maze.grid.label(id))
            .map(|label| label.to_string())
            .collect();
        println!("{}", labels.join(" "));
    }

    Ok(serde_json::json!({
        "found": result.found,
        "length": result.path.len(),
    }))
}
