//! Undirected station graph with name lookup

use hashbrown::HashMap;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{Connection, Station, StationId};
use crate::{Error, Fare};

/// Railway network: every station maps to its neighbours and the fare
/// of the connection between them.
///
/// Connections are symmetric. Inserting `(a, b, w)` makes both `a -> b`
/// and `b -> a` cost `w`, and inserting the same pair again overwrites
/// the stored fare instead of adding a parallel connection.
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    pub(crate) graph: UnGraph<Station, Connection>,
    index: HashMap<String, StationId>,
}

impl RailNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(stations: usize, connections: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(stations, connections),
            index: HashMap::with_capacity(stations),
        }
    }

    /// Adds a symmetric connection between two stations, registering
    /// either station if it is not known yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if `weight` is negative or does not
    /// fit into a [`Fare`]. The network is left unchanged in that case.
    pub fn insert(&mut self, source: &str, target: &str, weight: i64) -> Result<(), Error> {
        let fare = Fare::try_from(weight)
            .ok()
            .filter(|&fare| fare != crate::UNREACHABLE)
            .ok_or_else(|| Error::InvalidWeight {
                from: source.to_string(),
                to: target.to_string(),
                weight: weight.to_string(),
            })?;

        self.connect(source, target, fare);
        Ok(())
    }

    /// Infallible variant of [`insert`](Self::insert) for already validated fares.
    pub fn connect(&mut self, source: &str, target: &str, fare: Fare) {
        let a = self.add_station(source);
        let b = self.add_station(target);
        // update_edge matches an existing edge in either direction
        self.graph.update_edge(a, b, Connection { fare });
    }

    /// Registers a station without connections. Returns the existing id
    /// when the station is already part of the network.
    pub fn add_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.graph.add_node(Station::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Neighbouring stations of `name` with the fare to reach each of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the station is not in the network.
    pub fn neighbors(&self, name: &str) -> Result<HashMap<&str, Fare>, Error> {
        let id = self
            .station_id(name)
            .ok_or_else(|| Error::UnknownNode(name.to_string()))?;

        Ok(self
            .adjacent(id)
            .map(|(next, fare)| (self.graph[next].name.as_str(), fare))
            .collect())
    }

    /// Adjacent station ids with connection fares, in edge storage order
    pub(crate) fn adjacent(&self, id: NodeIndex) -> impl Iterator<Item = (NodeIndex, Fare)> + '_ {
        self.graph.edges(id).map(move |edge| {
            let next = if edge.source() == id {
                edge.target()
            } else {
                edge.source()
            };
            (next, edge.weight().fare)
        })
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.index.get(name).copied()
    }

    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.graph.node_weight(id).map(|station| station.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Station names in first-insertion order
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|station| station.name.as_str())
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_symmetric() {
        let mut network = RailNetwork::new();
        network.insert("PENZANCE", "TRURO", 12).unwrap();

        assert_eq!(network.neighbors("PENZANCE").unwrap()["TRURO"], 12);
        assert_eq!(network.neighbors("TRURO").unwrap()["PENZANCE"], 12);
        assert_eq!(network.connection_count(), 1);
    }

    #[test]
    fn reinsert_overwrites_both_directions() {
        let mut network = RailNetwork::new();
        network.insert("A", "B", 5).unwrap();
        network.insert("B", "A", 9).unwrap();
        network.insert("A", "B", 9).unwrap();

        assert_eq!(network.connection_count(), 1);
        assert_eq!(network.neighbors("A").unwrap()["B"], 9);
        assert_eq!(network.neighbors("B").unwrap()["A"], 9);
    }

    #[test]
    fn negative_weight_leaves_network_untouched() {
        let mut network = RailNetwork::new();
        network.insert("A", "B", 1).unwrap();

        let err = network.insert("A", "C", -3).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight { ref weight, .. } if weight == "-3"));
        assert!(!network.contains("C"));
        assert_eq!(network.neighbors("A").unwrap().len(), 1);
    }

    #[test]
    fn sentinel_sized_weight_is_rejected() {
        let mut network = RailNetwork::new();
        assert!(network.insert("A", "B", i64::from(Fare::MAX)).is_err());
        assert!(network.insert("A", "B", i64::MAX).is_err());
        assert!(network.is_empty());
    }

    #[test]
    fn unknown_station_neighbors_fail() {
        let network = RailNetwork::new();
        assert!(matches!(
            network.neighbors("NOWHERE"),
            Err(Error::UnknownNode(name)) if name == "NOWHERE"
        ));
    }

    #[test]
    fn isolated_station_is_a_key() {
        let mut network = RailNetwork::new();
        network.insert("A", "B", 1).unwrap();
        let d = network.add_station("D");

        assert_eq!(network.add_station("D"), d);
        assert!(network.neighbors("D").unwrap().is_empty());
        assert_eq!(network.stations().collect::<Vec<_>>(), ["A", "B", "D"]);
    }

    #[test]
    fn zero_fare_is_allowed() {
        let mut network = RailNetwork::new();
        network.insert("A", "B", 0).unwrap();
        assert_eq!(network.neighbors("B").unwrap()["A"], 0);
    }
}
