//! Text rendering of a maze
//!
//! Every cell is drawn as `+` at `(2x+1, 2y+1)`. Openings between cells are
//! `-` (horizontal) and `|` (vertical); walls stay blank.

use crate::error::{MazeError, Result};
use crate::graph::{EdgeSet, GraphProvider};
use crate::topology::RectGraph;

/// Draw the openings of `edges` over `grid`, one string per text row
pub fn render_lines(grid: &RectGraph, edges: &EdgeSet) -> Result<Vec<String>> {
    let width = grid.columns() * 2 + 1;
    let height = grid.rows() * 2 + 1;
    let mut canvas = vec![vec![' '; width]; height];

    for id in grid.node_ids() {
        let Some((x, y)) = grid.coords(id) else {
            continue;
        };
        let (col, row) = (x * 2 + 1, y * 2 + 1);
        canvas[row][col] = '+';

        for &n in grid.neighbors(id) {
            if !edges.contains(id, n) {
                continue;
            }
            let (nx, ny) = grid
                .coords(n)
                .ok_or_else(|| MazeError::unknown_node(n))?;

            match (nx as isize - x as isize, ny as isize - y as isize) {
                (1, 0) => canvas[row][col + 1] = '-',
                (0, 1) => canvas[row + 1][col] = '|',
                (-1, 0) => canvas[row][col - 1] = '-',
                (0, -1) => canvas[row - 1][col] = '|',
                _ => {
                    return Err(MazeError::invalid_value(
                        "connection",
                        grid.describe(n),
                    ))
                }
            }
        }
    }

    Ok(canvas.into_iter().map(|line| line.into_iter().collect()).collect())
}

/// Draw the maze as a single newline-terminated block of text
pub fn render_text(grid: &RectGraph, edges: &EdgeSet) -> Result<String> {
    let mut text = String::new();
    for line in render_lines(grid, edges)? {
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

/// One `label:(neighbors)` line per node, in iteration order
pub fn render_connections(graph: &dyn GraphProvider) -> String {
    let mut text = String::new();
    for id in graph.node_ids() {
        text.push_str(&graph.describe(id));
        text.push('\n');
    }
    text
}
