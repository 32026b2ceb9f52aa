//! Concrete graph topologies fed to the walk engine
//!
//! - `RectGraph`: rectangular grid with 4-neighbor adjacency
//! - `ring_graph`: cycle graph, degree 2 everywhere

use crate::error::{MazeError, Result};
use crate::graph::{Graph, GraphProvider, NodeId, NodeLabel};

/// Largest grid `RectGraph::new` accepts, in cells and per side
pub const MAX_CELLS: usize = 1 << 24;

/// Graph for nodes in a rectangular grid.
///
/// A node's label is its coordinates `(x, y)`, starting from `(0, 0)` in the
/// top-left corner. Nodes are stored row-major and list their neighbors in
/// the order right, down, left, up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectGraph {
    columns: usize,
    rows: usize,
    graph: Graph,
}

impl RectGraph {
    /// Build a `columns x rows` grid; fails with `InvalidValue` past [`MAX_CELLS`]
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        let cells = columns
            .checked_mul(rows)
            .filter(|&cells| cells <= MAX_CELLS && columns <= MAX_CELLS && rows <= MAX_CELLS)
            .ok_or_else(|| {
                MazeError::invalid_value(
                    "grid size",
                    format!("{}x{} exceeds {} cells", columns, rows, MAX_CELLS),
                )
            })?;

        let mut graph = Graph::with_capacity(cells);
        for y in 0..rows {
            for x in 0..columns {
                graph.add_node(NodeLabel::Grid { x, y });
            }
        }

        let index = |x: usize, y: usize| NodeId::new(x + y * columns);
        for y in 0..rows {
            for x in 0..columns {
                let node = index(x, y);
                if x + 1 < columns {
                    graph.push_neighbor(node, index(x + 1, y));
                }
                if y + 1 < rows {
                    graph.push_neighbor(node, index(x, y + 1));
                }
                if x > 0 {
                    graph.push_neighbor(node, index(x - 1, y));
                }
                if y > 0 {
                    graph.push_neighbor(node, index(x, y - 1));
                }
            }
        }

        Ok(RectGraph {
            columns,
            rows,
            graph,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn node_at(&self, x: usize, y: usize) -> Option<NodeId> {
        (x < self.columns && y < self.rows).then(|| NodeId::new(x + y * self.columns))
    }

    pub fn coords(&self, id: NodeId) -> Option<(usize, usize)> {
        match self.graph.label(id)? {
            NodeLabel::Grid { x, y } => Some((x, y)),
            NodeLabel::Opaque { .. } => None,
        }
    }
}

impl GraphProvider for RectGraph {
    fn node_ids(&self) -> Vec<NodeId> {
        self.graph.node_ids()
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.graph.neighbors(id)
    }

    fn label(&self, id: NodeId) -> Option<NodeLabel> {
        self.graph.label(id)
    }
}

/// Cycle graph `0 - 1 - ... - (n-1) - 0`; node `i` lists `i+1` then `i-1`
pub fn ring_graph(n: usize) -> Graph {
    let mut graph = Graph::with_capacity(n);
    for i in 0..n {
        graph.add_node(NodeLabel::Opaque { id: i as u64 });
    }
    if n < 3 {
        return graph;
    }
    for i in 0..n {
        graph.push_neighbor(NodeId::new(i), NodeId::new((i + 1) % n));
        graph.push_neighbor(NodeId::new(i), NodeId::new((i + n - 1) % n));
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(grid: &RectGraph, id: NodeId) -> Vec<String> {
        grid.neighbors(id)
            .iter()
            .map(|n| grid.label(*n).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_grid_adjacency_order() {
        let grid = RectGraph::new(3, 3).unwrap();
        let center = grid.node_at(1, 1).unwrap();
        assert_eq!(labels(&grid, center), ["(2, 1)", "(1, 2)", "(0, 1)", "(1, 0)"]);

        let corner = grid.node_at(2, 2).unwrap();
        assert_eq!(labels(&grid, corner), ["(1, 2)", "(2, 1)"]);
    }

    #[test]
    fn test_grid_is_symmetric_with_min_degree_two() {
        let grid = RectGraph::new(4, 3).unwrap();
        for id in grid.node_ids() {
            for &n in grid.neighbors(id) {
                assert!(grid.neighbors(n).contains(&id));
            }
        }
        assert_eq!(grid.graph().min_degree(), Some(2));
        assert_eq!(grid.node_count(), 12);
    }

    #[test]
    fn test_node_at_and_coords() {
        let grid = RectGraph::new(5, 2).unwrap();
        let id = grid.node_at(3, 1).unwrap();
        assert_eq!(id.index(), 8);
        assert_eq!(grid.coords(id), Some((3, 1)));
        assert_eq!(grid.node_at(5, 0), None);
        assert_eq!(grid.node_at(0, 2), None);
        assert_eq!(grid.coords(NodeId::new(10)), None);
    }

    #[test]
    fn test_zero_dimensions_are_empty() {
        assert_eq!(RectGraph::new(0, 7).unwrap().node_count(), 0);
        assert_eq!(RectGraph::new(7, 0).unwrap().node_count(), 0);
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = RectGraph::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, MazeError::InvalidValue { .. }));
        assert!(err.to_string().contains("exceeds"));

        assert!(RectGraph::new(0, usize::MAX).is_err());
        assert!(RectGraph::new(MAX_CELLS, 2).is_err());
    }

    #[test]
    fn test_ring_graph() {
        let ring = ring_graph(8);
        assert_eq!(ring.node_count(), 8);
        assert_eq!(ring.neighbors(NodeId::new(0)), &[NodeId::new(1), NodeId::new(7)]);
        assert_eq!(ring.min_degree(), Some(2));
        assert_eq!(ring_graph(2).min_degree(), Some(0));
    }
}
