use petgraph::graph::NodeIndex;

use super::regular_dijkstra::{settle, source_id};
use super::table::DistanceTable;
use crate::{Error, RailNetwork};

/// Distance table plus the station each reached station was entered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<'a> {
    table: DistanceTable<'a>,
    predecessors: Vec<Option<NodeIndex>>,
}

impl<'a> ShortestPathTree<'a> {
    pub fn distances(&self) -> &DistanceTable<'a> {
        &self.table
    }

    pub fn into_distances(self) -> DistanceTable<'a> {
        self.table
    }

    /// Station preceding `station` on its cheapest route, `None` for the
    /// source, unreached and unknown stations
    pub fn predecessor(&self, station: &str) -> Option<&'a str> {
        let network = self.table.network();
        let id = network.station_id(station)?;
        self.predecessors[id.index()].and_then(|prev| network.station_name(prev))
    }

    pub(crate) fn predecessor_of(&self, id: NodeIndex) -> Option<NodeIndex> {
        self.predecessors[id.index()]
    }
}

/// Dijkstra's algorithm that also keeps predecessor links, so the literal
/// cheapest hop sequence to every station can be rebuilt afterwards.
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if `source` is not in the network.
pub fn shortest_paths<'a>(
    network: &'a RailNetwork,
    source: &str,
) -> Result<ShortestPathTree<'a>, Error> {
    let start = source_id(network, source)?;
    let mut predecessors = vec![None; network.station_count()];
    let search = settle(network, start, None, Some(predecessors.as_mut_slice()));

    Ok(ShortestPathTree {
        table: DistanceTable::new(network, start, search.distances, search.settled),
        predecessors,
    })
}
