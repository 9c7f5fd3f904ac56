use std::fmt;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use crate::{Error, Fare, RailNetwork, UNREACHABLE};

/// Cheapest fare from one source station to every station of a network.
///
/// Iteration yields settled stations in the order Dijkstra settled them,
/// followed by the stations it never reached in network order.
#[derive(Clone)]
pub struct DistanceTable<'a> {
    network: &'a RailNetwork,
    source: NodeIndex,
    distances: Vec<Fare>,
    settled: Vec<NodeIndex>,
}

impl<'a> DistanceTable<'a> {
    pub(super) fn new(
        network: &'a RailNetwork,
        source: NodeIndex,
        distances: Vec<Fare>,
        settled: Vec<NodeIndex>,
    ) -> Self {
        Self {
            network,
            source,
            distances,
            settled,
        }
    }

    pub fn network(&self) -> &'a RailNetwork {
        self.network
    }

    pub fn source(&self) -> &'a str {
        self.name(self.source)
    }

    /// Raw table entry for `station`, [`UNREACHABLE`] when no path exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the station is not in the network.
    pub fn fare(&self, station: &str) -> Result<Fare, Error> {
        self.network
            .station_id(station)
            .map(|id| self.distances[id.index()])
            .ok_or_else(|| Error::UnknownNode(station.to_string()))
    }

    /// Cheapest fare to `station`, `None` if it is unknown or unreachable
    pub fn get(&self, station: &str) -> Option<Fare> {
        self.fare(station).ok().filter(|&fare| fare != UNREACHABLE)
    }

    pub fn is_reachable(&self, station: &str) -> bool {
        self.get(station).is_some()
    }

    /// Stations in the order their fare became final
    pub fn settlement_order(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.settled.iter().map(|&id| self.name(id))
    }

    /// Number of stations reachable from the source, the source included
    pub fn reached(&self) -> usize {
        self.settled.len()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// All `(station, fare)` entries: settled stations first, then the
    /// unreached ones carrying [`UNREACHABLE`].
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Fare)> + '_ {
        let mut seen = FixedBitSet::with_capacity(self.distances.len());
        for id in &self.settled {
            seen.insert(id.index());
        }

        let unreached = (0..self.distances.len())
            .filter(move |&index| !seen.contains(index))
            .map(NodeIndex::new);

        self.settled
            .iter()
            .copied()
            .chain(unreached)
            .map(|id| (self.name(id), self.distances[id.index()]))
    }

    pub(crate) fn distance(&self, id: NodeIndex) -> Fare {
        self.distances[id.index()]
    }

    fn name(&self, id: NodeIndex) -> &'a str {
        self.network.graph[id].name.as_str()
    }
}

impl PartialEq for DistanceTable<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.network, other.network)
            && self.source == other.source
            && self.distances == other.distances
            && self.settled == other.settled
    }
}

impl Eq for DistanceTable<'_> {}

impl fmt::Debug for DistanceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(station, fare)| {
                (station, (fare != UNREACHABLE).then_some(fare))
            }))
            .finish()
    }
}
