pub use crate::Error;
pub use crate::{Fare, UNREACHABLE};

// Graph store and loading
pub use crate::loading::{
    NetworkConfig, create_rail_network, network_from_reader, network_from_records,
};
pub use crate::model::{RailNetwork, Station, StationId};

// Queries
pub use crate::routing::dijkstra::{
    DistanceTable, ShortestPathTree, reachable_within, shortest_distances,
    shortest_distances_naive, shortest_paths,
};
pub use crate::routing::route::{Route, RouteStop, extract_path, extract_route};
