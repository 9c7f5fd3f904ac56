use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;

use super::state::State;
use super::table::DistanceTable;
use crate::{Error, Fare, RailNetwork, UNREACHABLE};

/// Dijkstra's algorithm over the fare network.
/// Returns the cheapest fare from `source` to every station.
///
/// Stations with equal tentative fares are settled in network insertion
/// order, so repeated queries yield identical tables.
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if `source` is not in the network.
pub fn shortest_distances<'a>(
    network: &'a RailNetwork,
    source: &str,
) -> Result<DistanceTable<'a>, Error> {
    let start = source_id(network, source)?;
    let search = settle(network, start, None, None);

    log::debug!(
        "Settled {} of {} stations from {source}",
        search.settled.len(),
        network.station_count()
    );

    Ok(DistanceTable::new(
        network,
        start,
        search.distances,
        search.settled,
    ))
}

/// Quadratic Dijkstra that scans every unvisited station for the cheapest
/// one on each step. Produces the same table as [`shortest_distances`].
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if `source` is not in the network.
pub fn shortest_distances_naive<'a>(
    network: &'a RailNetwork,
    source: &str,
) -> Result<DistanceTable<'a>, Error> {
    let start = source_id(network, source)?;
    let node_count = network.station_count();

    let mut distances = vec![UNREACHABLE; node_count];
    let mut visited = FixedBitSet::with_capacity(node_count);
    let mut settled = Vec::with_capacity(node_count);
    distances[start.index()] = 0;

    while settled.len() < node_count {
        // min_by_key keeps the first minimum, i.e. the lowest insertion index
        let Some(current) = (0..node_count)
            .filter(|&index| !visited.contains(index) && distances[index] != UNREACHABLE)
            .min_by_key(|&index| distances[index])
        else {
            break;
        };

        visited.insert(current);
        settled.push(NodeIndex::new(current));

        let cost = distances[current];
        for (next, fare) in network.adjacent(NodeIndex::new(current)) {
            let next_cost = cost.saturating_add(fare);
            if next_cost < distances[next.index()] {
                distances[next.index()] = next_cost;
            }
        }
    }

    Ok(DistanceTable::new(network, start, distances, settled))
}

/// Stations whose cheapest fare from `source` does not exceed `budget`,
/// in the order they were settled
///
/// # Errors
///
/// Returns [`Error::SourceNotFound`] if `source` is not in the network.
pub fn reachable_within<'a>(
    network: &'a RailNetwork,
    source: &str,
    budget: Fare,
) -> Result<Vec<(&'a str, Fare)>, Error> {
    let start = source_id(network, source)?;
    let search = settle(network, start, Some(budget), None);

    Ok(search
        .settled
        .iter()
        .filter_map(|&id| {
            network
                .station_name(id)
                .map(|name| (name, search.distances[id.index()]))
        })
        .collect())
}

pub(super) fn source_id(network: &RailNetwork, source: &str) -> Result<NodeIndex, Error> {
    network
        .station_id(source)
        .ok_or_else(|| Error::SourceNotFound(source.to_string()))
}

pub(super) struct Search {
    pub(super) distances: Vec<Fare>,
    pub(super) settled: Vec<NodeIndex>,
}

/// Heap-driven settling loop shared by the plain and traced searches.
/// Stops once the cheapest frontier fare exceeds `max_cost`; when
/// `predecessors` is given, every successful relaxation records the
/// station it came from.
pub(super) fn settle(
    network: &RailNetwork,
    start: NodeIndex,
    max_cost: Option<Fare>,
    mut predecessors: Option<&mut [Option<NodeIndex>]>,
) -> Search {
    let node_count = network.station_count();
    let mut distances = vec![UNREACHABLE; node_count];
    let mut visited = FixedBitSet::with_capacity(node_count);
    let mut settled = Vec::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count / 4 + 1);

    distances[start.index()] = 0;
    heap.push(State {
        cost: 0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Stale entry for a station that already has its final fare
        if visited.contains(node.index()) {
            continue;
        }

        if let Some(max) = max_cost {
            if cost > max {
                break;
            }
        }

        visited.insert(node.index());
        settled.push(node);

        for (next, fare) in network.adjacent(node) {
            if visited.contains(next.index()) {
                continue;
            }

            let next_cost = cost.saturating_add(fare);
            if next_cost < distances[next.index()] {
                distances[next.index()] = next_cost;
                if let Some(predecessors) = predecessors.as_deref_mut() {
                    predecessors[next.index()] = Some(node);
                }
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    Search { distances, settled }
}
