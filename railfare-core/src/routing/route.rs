//! Turning distance tables into routes a caller can print or serialize

use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use serde_json::{Value as JsonValue, json};

use super::dijkstra::{DistanceTable, ShortestPathTree};
use crate::{Error, Fare, UNREACHABLE};

/// A station on a route with the cumulative fare paid to get there
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStop {
    pub station: String,
    pub fare: Fare,
}

/// Ordered stations from departure to destination
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<RouteStop>,
}

impl Route {
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|stop| stop.station.as_str())
    }

    /// Cumulative fare at the last stop
    pub fn total_fare(&self) -> Fare {
        self.stops.last().map_or(0, |stop| stop.fare)
    }

    pub fn departure(&self) -> Option<&str> {
        self.stops.first().map(|stop| stop.station.as_str())
    }

    pub fn destination(&self) -> Option<&str> {
        self.stops.last().map(|stop| stop.station.as_str())
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn to_json(&self) -> JsonValue {
        json!({
            "departure": self.departure(),
            "destination": self.destination(),
            "total_fare": self.total_fare(),
            "stops": self.stops,
        })
    }

    fn push(&mut self, station: &str, fare: Fare) {
        self.stops.push(RouteStop {
            station: station.to_string(),
            fare,
        });
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .stops
            .iter()
            .map(|stop| format!("{} ({})", stop.station, stop.fare))
            .join(" -> ");
        f.write_str(&rendered)
    }
}

impl<'r> IntoIterator for &'r Route {
    type Item = &'r RouteStop;
    type IntoIter = std::slice::Iter<'r, RouteStop>;

    fn into_iter(self) -> Self::IntoIter {
        self.stops.iter()
    }
}

/// Walks the table in settlement order from `source` until `destination`.
///
/// Stations appear in the order their fares became final, so the result
/// lists every station cheaper than the destination, not only the hops of
/// the cheapest route. Use [`extract_path`] for the literal hop sequence.
/// The walk is cut short at the first unreachable entry.
///
/// # Errors
///
/// - [`Error::SourceMismatch`] if the table was not computed from `source`
/// - [`Error::UnknownNode`] if `destination` is not in the network
/// - [`Error::DestinationUnreachable`] if no path leads to `destination`
pub fn extract_route(
    table: &DistanceTable<'_>,
    source: &str,
    destination: &str,
) -> Result<Route, Error> {
    check_endpoints(table, source, destination)?;

    let mut route = Route::default();
    let mut started = false;

    for (station, fare) in table.iter() {
        if !started && station == source {
            started = true;
        }
        if !started {
            continue;
        }
        if fare == UNREACHABLE {
            log::debug!("Route from {source} truncated at unreachable station {station}");
            break;
        }

        route.push(station, fare);
        if station == destination {
            break;
        }
    }

    Ok(route)
}

/// Rebuilds the cheapest hop sequence from the tree's source to
/// `destination` by following predecessor links.
///
/// # Errors
///
/// - [`Error::UnknownNode`] if `destination` is not in the network
/// - [`Error::DestinationUnreachable`] if no path leads to `destination`
pub fn extract_path(tree: &ShortestPathTree<'_>, destination: &str) -> Result<Route, Error> {
    let table = tree.distances();
    let source = table.source();
    check_endpoints(table, source, destination)?;

    let network = table.network();
    let mut current = network
        .station_id(destination)
        .ok_or_else(|| Error::UnknownNode(destination.to_string()))?;

    let mut hops = vec![current];
    while let Some(prev) = tree.predecessor_of(current) {
        hops.push(prev);
        current = prev;
    }

    let mut route = Route::default();
    for id in hops.into_iter().rev() {
        let station = network
            .station_name(id)
            .ok_or_else(|| Error::UnknownNode(format!("#{}", id.index())))?;
        route.push(station, table.distance(id));
    }

    Ok(route)
}

fn check_endpoints(table: &DistanceTable<'_>, source: &str, destination: &str) -> Result<(), Error> {
    if table.source() != source {
        return Err(Error::SourceMismatch {
            expected: table.source().to_string(),
            found: source.to_string(),
        });
    }

    if table.fare(destination)? == UNREACHABLE {
        return Err(Error::DestinationUnreachable {
            from: source.to_string(),
            to: destination.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RailNetwork;
    use crate::routing::dijkstra::{shortest_distances, shortest_paths};

    fn branching() -> RailNetwork {
        // Two branches out of A: the west branch is cheap but leads nowhere
        let mut network = RailNetwork::new();
        network.insert("A", "WEST", 1).unwrap();
        network.insert("WEST", "WEST END", 1).unwrap();
        network.insert("A", "EAST", 5).unwrap();
        network.insert("EAST", "TERMINUS", 2).unwrap();
        network
    }

    #[test]
    fn settled_walk_on_a_line() {
        let mut network = RailNetwork::new();
        network.insert("A", "B", 4).unwrap();
        network.insert("B", "C", 3).unwrap();
        network.insert("A", "C", 10).unwrap();

        let table = shortest_distances(&network, "A").unwrap();
        let route = extract_route(&table, "A", "C").unwrap();

        assert_eq!(route.stations().collect::<Vec<_>>(), ["A", "B", "C"]);
        assert_eq!(route.total_fare(), 7);
        assert_eq!(route.to_string(), "A (0) -> B (4) -> C (7)");
    }

    #[test]
    fn settled_walk_differs_from_cheapest_path() {
        let network = branching();

        let table = shortest_distances(&network, "A").unwrap();
        let settled = extract_route(&table, "A", "TERMINUS").unwrap();
        assert_eq!(
            settled.stations().collect::<Vec<_>>(),
            ["A", "WEST", "WEST END", "EAST", "TERMINUS"]
        );

        let tree = shortest_paths(&network, "A").unwrap();
        let path = extract_path(&tree, "TERMINUS").unwrap();
        assert_eq!(
            path.stations().collect::<Vec<_>>(),
            ["A", "EAST", "TERMINUS"]
        );

        assert_eq!(settled.total_fare(), path.total_fare());
        assert_eq!(path.total_fare(), 7);
    }

    #[test]
    fn route_to_source_is_single_stop() {
        let network = branching();
        let table = shortest_distances(&network, "EAST").unwrap();

        let route = extract_route(&table, "EAST", "EAST").unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route.total_fare(), 0);

        let tree = shortest_paths(&network, "EAST").unwrap();
        assert_eq!(extract_path(&tree, "EAST").unwrap(), route);
    }

    #[test]
    fn unreachable_destination_fails() {
        let mut network = branching();
        network.add_station("ISLAND");

        let table = shortest_distances(&network, "A").unwrap();
        assert!(matches!(
            extract_route(&table, "A", "ISLAND"),
            Err(Error::DestinationUnreachable { to, .. }) if to == "ISLAND"
        ));

        let tree = shortest_paths(&network, "A").unwrap();
        assert!(matches!(
            extract_path(&tree, "ISLAND"),
            Err(Error::DestinationUnreachable { .. })
        ));
    }

    #[test]
    fn unknown_destination_and_wrong_source_fail() {
        let network = branching();
        let table = shortest_distances(&network, "A").unwrap();

        assert!(matches!(
            extract_route(&table, "A", "NOWHERE"),
            Err(Error::UnknownNode(_))
        ));
        assert!(matches!(
            extract_route(&table, "EAST", "TERMINUS"),
            Err(Error::SourceMismatch { .. })
        ));
    }

    #[test]
    fn json_output_lists_stops() {
        let mut network = RailNetwork::new();
        network.insert("A", "B", 4).unwrap();
        let tree = shortest_paths(&network, "A").unwrap();
        let route = extract_path(&tree, "B").unwrap();

        assert_eq!(
            route.to_json(),
            json!({
                "departure": "A",
                "destination": "B",
                "total_fare": 4,
                "stops": [
                    { "station": "A", "fare": 0 },
                    { "station": "B", "fare": 4 },
                ],
            })
        );
        assert_eq!(
            serde_json::to_string(&route).unwrap(),
            r#"[{"station":"A","fare":0},{"station":"B","fare":4}]"#
        );
    }
}
