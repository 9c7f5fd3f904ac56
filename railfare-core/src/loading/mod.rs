//! This module is responsible for loading fare tables from CSV
//! and building the railway network out of them.

mod builder;
mod config;
mod parser;
mod raw_types;

pub use builder::{create_rail_network, network_from_reader, network_from_records};
pub use config::NetworkConfig;
pub use raw_types::FeedConnection;
