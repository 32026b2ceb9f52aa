use std::collections::BTreeSet;

use crate::graph::types::NodeId;

/// Set of directed `(from, to)` pairs; a tree edge is stored in both directions.
///
/// Backed by an ordered set so iteration is deterministic for a given content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    pairs: BTreeSet<(NodeId, NodeId)>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert both `(a, b)` and `(b, a)`
    pub fn insert_undirected(&mut self, a: NodeId, b: NodeId) {
        self.pairs.insert((a, b));
        self.pairs.insert((b, a));
    }

    /// Insert a single directed pair
    pub fn insert(&mut self, from: NodeId, to: NodeId) -> bool {
        self.pairs.insert((from, to))
    }

    pub fn contains(&self, from: NodeId, to: NodeId) -> bool {
        self.pairs.contains(&(from, to))
    }

    /// Number of directed pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of distinct undirected edges
    pub fn undirected_len(&self) -> usize {
        self.undirected().count()
    }

    /// True when every `(a, b)` has a matching `(b, a)`
    pub fn is_symmetric(&self) -> bool {
        self.pairs.iter().all(|&(a, b)| self.pairs.contains(&(b, a)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.pairs.iter().copied()
    }

    /// Each undirected edge once, as `(low, high)`
    pub fn undirected(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.pairs
            .iter()
            .copied()
            .filter(|&(a, b)| a < b || (a > b && !self.pairs.contains(&(b, a))))
            .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
    }
}

impl FromIterator<(NodeId, NodeId)> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId)>>(iter: I) -> Self {
        EdgeSet {
            pairs: iter.into_iter().collect(),
        }
    }
}
