//! Cheapest-fare routing over an undirected railway network.
//!
//! The network is built once from `(station, connected station, cost)`
//! triples, queried with Dijkstra from a single source, and the resulting
//! distance table is turned into a [`Route`](routing::Route) towards a
//! destination.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use model::RailNetwork;

/// Ticket cost between two stations, in whole currency units
pub type Fare = u32;

/// Sentinel stored in a distance table for stations the source cannot reach
pub const UNREACHABLE: Fare = Fare::MAX;
