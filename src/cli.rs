use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use railfare_core::prelude::*;

use crate::config::{self, FileConfig, Overrides};
use crate::error::AppError;
use crate::report;

/// Railfare: cheapest train tickets between two stations.
#[derive(Parser, Debug)]
#[command(name = "railfare")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// CSV fare table with `station, connected station, cost` rows
    #[arg(short, long, global = true)]
    network: Option<PathBuf>,

    /// TOML file with fare table settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// The fare table starts with a header row
    #[arg(long, global = true)]
    headers: bool,

    /// Field separator of the fare table
    #[arg(short, long, global = true)]
    delimiter: Option<char>,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cheapest route between a departure and a destination
    Route {
        /// Departure station
        from: String,

        /// Destination station
        to: String,

        /// How stations on the route are listed
        #[arg(short, long, value_enum, default_value_t = RouteMode::Path)]
        mode: RouteMode,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Cheapest fare from a departure to every station
    Fares {
        /// Departure station
        from: String,

        /// Only list stations reachable for at most this fare
        #[arg(short, long)]
        budget: Option<Fare>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteMode {
    /// Stations along the cheapest route
    Path,
    /// Every station settled before the destination, in settlement order
    Settled,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    /// Loads the network and runs the requested query, returning the
    /// rendered report.
    pub fn execute(&self) -> Result<String, AppError> {
        let network = self.load_network()?;

        match &self.command {
            Commands::Route {
                from,
                to,
                mode,
                format,
            } => {
                let route = find_route(&network, from, to, *mode)?;
                tracing::info!(
                    "Cheapest fare {from} -> {to}: {} over {} stations",
                    route.total_fare(),
                    route.len()
                );
                report::render_route(&route, *format)
            }
            Commands::Fares {
                from,
                budget,
                format,
            } => {
                let fares = match budget {
                    Some(budget) => reachable_within(&network, from, *budget)?,
                    None => {
                        let table = shortest_distances(&network, from)?;
                        table.iter().collect()
                    }
                };
                report::render_fares(from, &fares, *format)
            }
        }
    }

    fn load_network(&self) -> Result<RailNetwork, AppError> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let overrides = Overrides {
            network: self.network.clone(),
            has_headers: self.headers,
            delimiter: self.delimiter,
        };

        let config = config::resolve(file, overrides)?;
        tracing::debug!("Using fare table settings: {config:?}");
        Ok(create_rail_network(&config)?)
    }
}

pub fn find_route(
    network: &RailNetwork,
    from: &str,
    to: &str,
    mode: RouteMode,
) -> Result<Route, railfare_core::Error> {
    match mode {
        RouteMode::Path => {
            let tree = shortest_paths(network, from)?;
            extract_path(&tree, to)
        }
        RouteMode::Settled => {
            let table = shortest_distances(network, from)?;
            extract_route(&table, from, to)
        }
    }
}
