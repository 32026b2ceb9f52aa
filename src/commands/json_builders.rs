//! Shared JSON building utilities for consistent JSON output formats

use mazewalk_core::error::Result;
use mazewalk_core::generator::Maze;
use mazewalk_core::graph::NodeId;
use mazewalk_core::walk::WalkStats;

/// `[x, y]` for a maze cell, `null` if the id is not on the grid
pub fn build_cell_json(maze: &Maze, id: NodeId) -> serde_json::Value {
    match maze.grid.coords(id) {
        Some((x, y)) => serde_json::json!([x, y]),
        None => serde_json::Value::Null,
    }
}

/// Walk statistics object
pub fn build_stats_json(stats: &WalkStats) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(stats)?)
}

/// Full maze object: dimensions, seed, statistics, corridors and drawing
pub fn build_maze_json(maze: &Maze, seed: u64) -> Result<serde_json::Value> {
    let corridors: Vec<_> = maze
        .edges
        .undirected()
        .map(|(a, b)| serde_json::json!([build_cell_json(maze, a), build_cell_json(maze, b)]))
        .collect();

    let rendering = maze.render()?;
    let lines: Vec<&str> = rendering.lines().collect();

    Ok(serde_json::json!({
        "width": maze.grid.columns(),
        "height": maze.grid.rows(),
        "seed": seed,
        "root": maze.root.map(|id| build_cell_json(maze, id)),
        "stats": build_stats_json(&maze.stats)?,
        "corridors": corridors,
        "rendering": lines,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::generator::MazeGenerator;
    use mazewalk_core::walk::seeded_rng;

    #[test]
    fn test_maze_json_shape() {
        let maze = MazeGenerator::default()
            .generate(3, 2, &mut seeded_rng(4))
            .unwrap();
        let json = build_maze_json(&maze, 4).unwrap();

        assert_eq!(json["width"], 3);
        assert_eq!(json["height"], 2);
        assert_eq!(json["seed"], 4);
        assert_eq!(json["corridors"].as_array().unwrap().len(), 5);
        assert_eq!(json["rendering"].as_array().unwrap().len(), 5);
        assert_eq!(json["stats"]["walk_count"], maze.stats.walk_count);
    }
}
