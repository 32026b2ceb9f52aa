//! Rectangular maze generation: grid, random walk, verification

use std::time::Instant;

use tracing::{debug, info};

use crate::error::{MazeError, Result};
use crate::graph::{traverse, traverse_node, EdgeSet, NodeId, TraversalResult};
use crate::render::render_text;
use crate::topology::RectGraph;
use crate::trace_time;
use crate::walk::{random_walk, NeighborPicker, WalkOptions, WalkStats};

/// A verified perfect maze over a rectangular grid
#[derive(Debug, Clone)]
pub struct Maze {
    pub grid: RectGraph,
    pub edges: EdgeSet,
    pub stats: WalkStats,
    pub root: Option<NodeId>,
}

impl Maze {
    pub fn render(&self) -> Result<String> {
        render_text(&self.grid, &self.edges)
    }

    /// Path along maze corridors between two cells
    pub fn find_path(&self, from: (usize, usize), to: (usize, usize)) -> Result<TraversalResult> {
        let start = self.cell(from)?;
        let stop = self.cell(to)?;
        traverse_node(&self.grid, start, &self.edges, Some(stop))
    }

    /// Coordinates of each node on `path`
    pub fn coords_of(&self, path: &[NodeId]) -> Vec<(usize, usize)> {
        path.iter().filter_map(|&id| self.grid.coords(id)).collect()
    }

    fn cell(&self, (x, y): (usize, usize)) -> Result<NodeId> {
        self.grid.node_at(x, y).ok_or_else(|| {
            MazeError::invalid_value(
                "cell",
                format!(
                    "({}, {}) outside {}x{} maze",
                    x,
                    y,
                    self.grid.columns(),
                    self.grid.rows()
                ),
            )
        })
    }
}

/// Builds and verifies rectangular mazes
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator {
    options: WalkOptions,
}

impl MazeGenerator {
    pub fn new(options: WalkOptions) -> Self {
        MazeGenerator { options }
    }

    pub fn options(&self) -> &WalkOptions {
        &self.options
    }

    #[tracing::instrument(skip(self, picker))]
    pub fn generate<P: NeighborPicker + ?Sized>(
        &self,
        width: usize,
        height: usize,
        picker: &mut P,
    ) -> Result<Maze> {
        let start = Instant::now();
        let grid = RectGraph::new(width, height)?;
        debug!(nodes = grid.graph().len(), min_degree = ?grid.graph().min_degree(), "grid built");

        let outcome = random_walk(&grid, picker, &self.options)?;
        trace_time!(start, "random_walk");

        traverse(&grid, &outcome.edges)?;
        trace_time!(start, "verify");

        info!(
            width,
            height,
            walk_count = outcome.stats.walk_count,
            loop_erase_count = outcome.stats.loop_erase_count,
            "maze generated"
        );

        Ok(Maze {
            grid,
            edges: outcome.edges,
            stats: outcome.stats,
            root: outcome.root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphProvider;
    use crate::walk::seeded_rng;

    #[test]
    fn test_square_scenario() {
        for seed in 0..50 {
            let maze = MazeGenerator::default()
                .generate(2, 2, &mut seeded_rng(seed))
                .unwrap();

            assert_eq!(maze.edges.len(), 6);
            assert_eq!(maze.edges.undirected_len(), 3);
            assert!((1..=4).contains(&maze.stats.walk_count));
            for id in maze.grid.node_ids() {
                let reach = traverse_node(&maze.grid, id, &maze.edges, None).unwrap();
                assert_eq!(reach.visited, 4);
            }
        }
    }

    #[test]
    fn test_single_cell() {
        let maze = MazeGenerator::default()
            .generate(1, 1, &mut seeded_rng(0))
            .unwrap();
        assert!(maze.edges.is_empty());
        assert_eq!(maze.stats.walk_count, 0);
        assert_eq!(maze.render().unwrap(), "   \n + \n   \n");
    }

    #[test]
    fn test_corner_to_corner_path() {
        let maze = MazeGenerator::default()
            .generate(20, 40, &mut seeded_rng(11))
            .unwrap();
        let result = maze.find_path((0, 0), (19, 39)).unwrap();

        assert!(result.found);
        let coords = maze.coords_of(&result.path);
        assert_eq!(coords.first(), Some(&(0, 0)));
        assert_eq!(coords.last(), Some(&(19, 39)));
        for step in coords.windows(2) {
            let (a, b) = (step[0], step[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
        }
    }

    #[test]
    fn test_find_path_outside_grid() {
        let maze = MazeGenerator::default()
            .generate(3, 3, &mut seeded_rng(5))
            .unwrap();
        let err = maze.find_path((0, 0), (3, 0)).unwrap_err();
        assert!(matches!(err, MazeError::InvalidValue { .. }));
    }

    #[test]
    fn test_oversized_dimensions_are_invalid() {
        let err = MazeGenerator::default()
            .generate(usize::MAX, 2, &mut seeded_rng(0))
            .unwrap_err();
        assert!(matches!(err, MazeError::InvalidValue { .. }));
        assert_eq!(err.exit_code(), crate::error::ExitCode::Usage);
    }

    #[test]
    fn test_thin_grid_needs_backtrack() {
        // 1xN grids have degree-1 ends
        let err = MazeGenerator::default()
            .generate(1, 5, &mut seeded_rng(2))
            .unwrap_err();
        assert!(matches!(err, MazeError::StructuralPrecondition { .. }));

        let generator = MazeGenerator::new(WalkOptions {
            dead_ends: crate::walk::DeadEndPolicy::Backtrack,
            ..Default::default()
        });
        let maze = generator.generate(1, 5, &mut seeded_rng(2)).unwrap();
        assert_eq!(maze.edges.undirected_len(), 4);
    }
}
