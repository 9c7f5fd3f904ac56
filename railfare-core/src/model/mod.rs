//! Railway network model
//!
//! Contains the station graph built from fare tables.

pub mod components;
pub mod network;

pub use components::{Connection, Station, StationId};
pub use network::RailNetwork;
