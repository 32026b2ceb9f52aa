use std::collections::HashMap;

use crate::graph::NodeId;

/// Sequence of the walk in progress plus each node's position in it
#[derive(Debug, Clone)]
pub(crate) struct WalkState {
    sequence: Vec<NodeId>,
    positions: HashMap<NodeId, usize>,
}

impl WalkState {
    pub(crate) fn new(start: NodeId) -> Self {
        let mut state = WalkState {
            sequence: Vec::new(),
            positions: HashMap::new(),
        };
        state.push(start);
        state
    }

    pub(crate) fn push(&mut self, node: NodeId) {
        self.positions.insert(node, self.sequence.len());
        self.sequence.push(node);
    }

    pub(crate) fn position(&self, node: NodeId) -> Option<usize> {
        self.positions.get(&node).copied()
    }

    pub(crate) fn last(&self) -> NodeId {
        // never empty: constructed with the start node and truncation keeps index 0
        self.sequence[self.sequence.len() - 1]
    }

    /// Node the walk arrived from, `None` while only the start node is present
    pub(crate) fn previous(&self) -> Option<NodeId> {
        self.sequence.len().checked_sub(2).map(|i| self.sequence[i])
    }

    /// Erase the loop closed at `position`: keep `sequence[..=position]`
    pub(crate) fn erase_after(&mut self, position: usize) {
        for node in self.sequence.drain(position + 1..) {
            self.positions.remove(&node);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.sequence.len()
    }

    pub(crate) fn nodes(&self) -> &[NodeId] {
        &self.sequence
    }
}
