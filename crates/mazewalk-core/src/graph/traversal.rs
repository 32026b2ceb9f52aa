use std::collections::HashSet;

use tracing::debug;

use crate::error::{MazeError, Result};
use crate::graph::edges::EdgeSet;
use crate::graph::types::{GraphProvider, NodeId};

/// Outcome of a depth-first walk over an edge subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalResult {
    /// Distinct nodes visited before the walk ended
    pub visited: usize,
    /// Whether the stop node was reached
    pub found: bool,
    /// Start-to-stop path (inclusive) when `found`, empty otherwise
    pub path: Vec<NodeId>,
}

/// One level of the explicit descent stack
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    cursor: usize,
}

/// Depth-first walk from `start` following only pairs present in `edges`.
///
/// Never steps back along the edge just arrived on. Reaching a node a second
/// time means `edges` contains a cycle and fails with `CycleDetected`.
pub fn traverse_node(
    graph: &dyn GraphProvider,
    start: NodeId,
    edges: &EdgeSet,
    stop: Option<NodeId>,
) -> Result<TraversalResult> {
    if graph.label(start).is_none() {
        return Err(MazeError::unknown_node(start));
    }

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut path = vec![start];
    visited.insert(start);

    if stop == Some(start) {
        return Ok(TraversalResult {
            visited: 1,
            found: true,
            path,
        });
    }

    let mut stack = vec![Frame {
        node: start,
        parent: None,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let neighbors = graph.neighbors(frame.node);
        let Some(&next) = neighbors.get(frame.cursor) else {
            stack.pop();
            path.pop();
            continue;
        };
        frame.cursor += 1;

        if !edges.contains(frame.node, next) || frame.parent == Some(next) {
            continue;
        }

        if !visited.insert(next) {
            return Err(MazeError::CycleDetected {
                node: graph.describe(next),
            });
        }

        let parent = frame.node;
        path.push(next);

        if stop == Some(next) {
            return Ok(TraversalResult {
                visited: visited.len(),
                found: true,
                path,
            });
        }

        stack.push(Frame {
            node: next,
            parent: Some(parent),
            cursor: 0,
        });
    }

    Ok(TraversalResult {
        visited: visited.len(),
        found: false,
        path,
    })
}

/// Verify that `edges` forms a single acyclic structure covering every node.
///
/// Returns the number of nodes visited.
pub fn traverse(graph: &dyn GraphProvider, edges: &EdgeSet) -> Result<usize> {
    let Some(&first) = graph.node_ids().first() else {
        return Ok(0);
    };

    let result = traverse_node(graph, first, edges, None)?;
    let total = graph.node_count();
    if result.visited != total {
        return Err(MazeError::IncompleteCoverage {
            visited: result.visited,
            total,
        });
    }

    debug!(visited = result.visited, "traverse passed");
    Ok(result.visited)
}
