use std::fs::File;
use std::io::{BufReader, Read};

use log::{debug, info};

use super::config::NetworkConfig;
use super::parser::{parse_cost, read_connections};
use crate::{Error, RailNetwork};

/// Creates a railway network from the fare table named in `config`
///
/// # Errors
///
/// Returns an error if the file cannot be read or a row holds an empty
/// station name or an invalid cost
pub fn create_rail_network(config: &NetworkConfig) -> Result<RailNetwork, Error> {
    validate_config(config)?;

    info!("Loading fare table: {}", config.csv_path.display());

    let file = File::open(&config.csv_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!(
                "Failed to open file '{}': {}",
                config.csv_path.display(),
                e
            ),
        )
    })?;

    let network = network_from_reader(BufReader::new(file), config)?;
    info!(
        "Railway network created: {} stations, {} connections",
        network.station_count(),
        network.connection_count()
    );
    Ok(network)
}

/// Builds a network from any CSV source, using the header and delimiter
/// settings of `config`
///
/// # Errors
///
/// Returns an error on malformed CSV, empty station names or invalid costs
pub fn network_from_reader<R: Read>(reader: R, config: &NetworkConfig) -> Result<RailNetwork, Error> {
    let rows = read_connections(reader, config)?;
    let mut network = RailNetwork::with_capacity(rows.len(), rows.len());

    for row in rows {
        let connection = row.connection;
        if connection.station.is_empty() || connection.connected_station.is_empty() {
            return Err(Error::InvalidData(format!(
                "Row {}: station name is empty",
                row.line
            )));
        }

        let weight = parse_cost(&connection.cost).ok_or_else(|| Error::InvalidWeight {
            from: connection.station.clone(),
            to: connection.connected_station.clone(),
            weight: connection.cost.clone(),
        })?;

        network.insert(&connection.station, &connection.connected_station, weight)?;
    }

    debug!("Parsed {} connections", network.connection_count());
    Ok(network)
}

/// Builds a network from already typed `(station, connected station, cost)`
/// triples
///
/// # Errors
///
/// Returns [`Error::InvalidWeight`] for the first negative cost
pub fn network_from_records<I, S>(records: I) -> Result<RailNetwork, Error>
where
    I: IntoIterator<Item = (S, S, i64)>,
    S: AsRef<str>,
{
    let mut network = RailNetwork::new();
    for (station, connected_station, cost) in records {
        network.insert(station.as_ref(), connected_station.as_ref(), cost)?;
    }
    Ok(network)
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if !config.csv_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Fare table not found: {}", config.csv_path.display()),
        )));
    }

    if !config.delimiter.is_ascii() {
        return Err(Error::InvalidData(format!(
            "Delimiter must be an ASCII character, got byte {}",
            config.delimiter
        )));
    }

    Ok(())
}
