pub mod dijkstra;
pub mod route;

pub use dijkstra::{DistanceTable, ShortestPathTree};
pub use route::{Route, RouteStop};
