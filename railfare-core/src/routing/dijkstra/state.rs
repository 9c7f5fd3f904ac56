use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

use crate::Fare;

#[derive(Copy, Clone, Eq, PartialEq)]
pub(super) struct State {
    pub(super) cost: Fare,
    pub(super) node: NodeIndex,
}

// Min-heap by cost, then by insertion index, so that equal fares settle
// in the order stations were added to the network
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
