use std::fmt;

use serde::Serialize;

use crate::error::{MazeError, Result};

/// Stable index of a node inside its owning [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Human-facing identity of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeLabel {
    /// Cell of a rectangular grid, `(0, 0)` is the top-left corner
    Grid { x: usize, y: usize },
    /// Node without spatial meaning
    Opaque { id: u64 },
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Grid { x, y } => write!(f, "({}, {})", x, y),
            NodeLabel::Opaque { id } => write!(f, "{}", id),
        }
    }
}

/// A graph element: identity plus ordered, non-owning neighbor references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    label: NodeLabel,
    neighbors: Vec<NodeId>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> NodeLabel {
        self.label
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Read-only view of a graph consumed by the walk engine and the verifier
pub trait GraphProvider {
    /// All node ids in stable iteration order
    fn node_ids(&self) -> Vec<NodeId>;
    fn node_count(&self) -> usize;
    /// Neighbors in adjacency order; empty for unknown ids
    fn neighbors(&self, id: NodeId) -> &[NodeId];
    fn label(&self, id: NodeId) -> Option<NodeLabel>;

    /// `label:(n1, n2, ...)` form used in fault messages
    fn describe(&self, id: NodeId) -> String {
        let Some(label) = self.label(id) else {
            return id.to_string();
        };
        let neighbors = self
            .neighbors(id)
            .iter()
            .map(|n| match self.label(*n) {
                Some(l) => l.to_string(),
                None => n.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}:({})", label, neighbors)
    }
}

/// Owning arena of nodes addressed by [`NodeId`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a graph from verbatim adjacency lists, labelling node `i` as `Opaque { id: i }`.
    ///
    /// Lists are taken as given: symmetry is the caller's responsibility.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let mut graph = Graph::with_capacity(adjacency.len());
        for i in 0..adjacency.len() {
            graph.add_node(NodeLabel::Opaque { id: i as u64 });
        }
        for (i, list) in adjacency.iter().enumerate() {
            for &j in list {
                if j >= adjacency.len() {
                    return Err(MazeError::invalid_value(
                        "adjacency",
                        format!("node {} lists neighbor {} out of range", i, j),
                    ));
                }
                graph.nodes[i].neighbors.push(NodeId(j));
            }
        }
        Ok(graph)
    }

    pub fn add_node(&mut self, label: NodeLabel) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            label,
            neighbors: Vec::new(),
        });
        id
    }

    /// Add a symmetric edge; `a` lists `b` last and `b` lists `a` last
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        if a == b {
            return Err(MazeError::invalid_value("edge", format!("self loop at {}", a)));
        }
        if self.node(a).is_none() {
            return Err(MazeError::unknown_node(a));
        }
        if self.node(b).is_none() {
            return Err(MazeError::unknown_node(b));
        }
        self.nodes[a.0].neighbors.push(b);
        self.nodes[b.0].neighbors.push(a);
        Ok(())
    }

    /// Append a one-way adjacency entry, for builders that control neighbor order
    pub(crate) fn push_neighbor(&mut self, from: NodeId, to: NodeId) {
        self.nodes[from.0].neighbors.push(to);
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Smallest neighbor count over all nodes, `None` for an empty graph
    pub fn min_degree(&self) -> Option<usize> {
        self.nodes.iter().map(Node::degree).min()
    }
}

impl GraphProvider for Graph {
    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::neighbors).unwrap_or(&[])
    }

    fn label(&self, id: NodeId) -> Option<NodeLabel> {
        self.node(id).map(Node::label)
    }
}
