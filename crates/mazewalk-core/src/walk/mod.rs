//! Loop-erased random walk engine (Wilson's algorithm)
//!
//! Converts a connected graph into a spanning tree by walking from every node
//! not yet in the maze until the walk hits the maze, erasing loops as they
//! form. The very first walk has no maze to hit: it stops as soon as it would
//! close a loop, and its last node becomes the root of the tree.

pub mod picker;
mod state;

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{MazeError, Result};
use crate::graph::{EdgeSet, GraphProvider, NodeId};
pub use picker::{seeded_rng, NeighborPicker};
use state::WalkState;

/// What to do when the only neighbor left is the one the walk came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeadEndPolicy {
    /// Fail with `StructuralPrecondition`
    #[default]
    Fail,
    /// Step back to the predecessor, which closes (and erases) a loop
    Backtrack,
}

impl std::str::FromStr for DeadEndPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(DeadEndPolicy::Fail),
            "backtrack" => Ok(DeadEndPolicy::Backtrack),
            other => Err(format!(
                "unknown dead-end policy '{}' (expected: fail, backtrack)",
                other
            )),
        }
    }
}

/// How the tree gets its first member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RootSelection {
    /// The first walk runs until it would close a loop; its last node is the root
    #[default]
    FirstLoop,
    /// The first node in iteration order is the root before any walk begins
    FirstNode,
}

impl std::str::FromStr for RootSelection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-loop" => Ok(RootSelection::FirstLoop),
            "first-node" => Ok(RootSelection::FirstNode),
            other => Err(format!(
                "unknown root selection '{}' (expected: first-loop, first-node)",
                other
            )),
        }
    }
}

/// Options for a walk run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Maximum walk steps across the whole run (None = unbounded)
    pub max_steps: Option<u64>,
    pub dead_ends: DeadEndPolicy,
    pub root: RootSelection,
}

/// Usage statistics of a walk run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    /// One per starting node that was not yet in the maze
    pub walk_count: u32,
    /// Number of loop erasures across all walks
    pub loop_erase_count: u32,
    /// Neighbor choices made
    pub steps: u64,
}

impl fmt::Display for WalkStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "walkCnt: {}, loopEraseCnt: {}",
            self.walk_count, self.loop_erase_count
        )
    }
}

/// Spanning tree edges plus statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkOutcome {
    pub edges: EdgeSet,
    pub stats: WalkStats,
    /// First node to join the maze, `None` for an empty graph
    pub root: Option<NodeId>,
}

/// Run loop-erased random walks over every node of `graph`.
///
/// The graph must be connected and every node reached mid-walk must have at
/// least two neighbors (unless `DeadEndPolicy::Backtrack` is set).
#[tracing::instrument(skip(graph, picker, options), fields(nodes = graph.node_count(), max_steps = ?options.max_steps))]
pub fn random_walk<P: NeighborPicker + ?Sized>(
    graph: &dyn GraphProvider,
    picker: &mut P,
    options: &WalkOptions,
) -> Result<WalkOutcome> {
    let ids = graph.node_ids();
    let mut edges = EdgeSet::new();
    let mut stats = WalkStats::default();

    if ids.len() <= 1 {
        return Ok(WalkOutcome {
            edges,
            stats,
            root: ids.first().copied(),
        });
    }

    let mut maze: HashSet<NodeId> = HashSet::with_capacity(ids.len());
    let mut root = None;
    if options.root == RootSelection::FirstNode {
        maze.insert(ids[0]);
        root = Some(ids[0]);
    }

    for &start in &ids {
        if maze.contains(&start) {
            continue;
        }

        let mut walk = WalkState::new(start);
        loop {
            let next = next_step(graph, &walk, picker, options.dead_ends)?;
            stats.steps += 1;
            if let Some(limit) = options.max_steps {
                if stats.steps > limit {
                    return Err(MazeError::StepBudgetExhausted { steps: limit });
                }
            }

            if let Some(position) = walk.position(next) {
                if maze.is_empty() {
                    // bootstrap walk: stop before closing the loop
                    break;
                }
                trace!(at = %next, erased = walk.len() - position - 1, "loop erased");
                walk.erase_after(position);
                stats.loop_erase_count += 1;
                continue;
            }

            walk.push(next);
            if maze.contains(&next) {
                break;
            }
        }

        if maze.is_empty() {
            let last = walk.last();
            maze.insert(last);
            root = Some(last);
        }

        for pair in walk.nodes().windows(2) {
            maze.insert(pair[0]);
            edges.insert_undirected(pair[0], pair[1]);
        }

        stats.walk_count += 1;
        debug!(start = %start, length = walk.len(), maze = maze.len(), "walk joined maze");
    }

    debug!(
        walk_count = stats.walk_count,
        loop_erase_count = stats.loop_erase_count,
        steps = stats.steps,
        "random walk complete"
    );

    Ok(WalkOutcome { edges, stats, root })
}

/// Choose the next node uniformly among neighbors other than the predecessor
fn next_step<P: NeighborPicker + ?Sized>(
    graph: &dyn GraphProvider,
    walk: &WalkState,
    picker: &mut P,
    dead_ends: DeadEndPolicy,
) -> Result<NodeId> {
    let current = walk.last();
    let previous = walk.previous();
    let neighbors = graph.neighbors(current);
    let mut candidates = neighbors.iter().copied().filter(|&n| Some(n) != previous);

    let count = candidates.clone().count();
    if count == 0 {
        return match (dead_ends, previous) {
            (DeadEndPolicy::Backtrack, Some(prev)) => Ok(prev),
            _ => Err(MazeError::StructuralPrecondition {
                node: graph.describe(current),
                degree: neighbors.len(),
            }),
        };
    }

    let index = picker.pick(count);
    candidates
        .nth(index)
        .ok_or_else(|| MazeError::StructuralPrecondition {
            node: graph.describe(current),
            degree: neighbors.len(),
        })
}
