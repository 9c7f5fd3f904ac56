//! Railway network components - stations and connections

use petgraph::graph::NodeIndex;

use crate::Fare;

/// Position of a station in the network, assigned in first-insertion order
pub type StationId = NodeIndex;

/// Railway graph node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    /// Station name, unique within a network
    pub name: String,
}

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Railway graph edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    /// Ticket cost for travelling the connection in either direction
    pub fare: Fare,
}
