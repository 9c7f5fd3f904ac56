mod regular_dijkstra;
mod state;
mod table;
mod traced_dijkstra;

pub use regular_dijkstra::{reachable_within, shortest_distances, shortest_distances_naive};
pub use table::DistanceTable;
pub use traced_dijkstra::{ShortestPathTree, shortest_paths};
