use std::io::Read;

use super::config::NetworkConfig;
use super::raw_types::FeedConnection;
use crate::Error;

/// A fare table row with the line it was read from
#[derive(Debug)]
pub(super) struct ParsedRow {
    pub(super) line: u64,
    pub(super) connection: FeedConnection,
}

pub(super) fn read_connections<R: Read>(
    reader: R,
    config: &NetworkConfig,
) -> Result<Vec<ParsedRow>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);
        let connection: FeedConnection = record.deserialize(None)?;
        rows.push(ParsedRow { line, connection });
    }

    Ok(rows)
}

/// Parses a fare, keeping the sign so negative costs can be reported
pub(super) fn parse_cost(cost: &str) -> Option<i64> {
    cost.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_by_position() {
        let data = "PENZANCE,ST ERTH,4\nST ERTH , CAMBORNE , 6\n";
        let rows = read_connections(data.as_bytes(), &NetworkConfig::new("unused")).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line, 2);
        assert_eq!(
            rows[1].connection,
            FeedConnection {
                station: "ST ERTH".to_string(),
                connected_station: "CAMBORNE".to_string(),
                cost: "6".to_string(),
            }
        );
    }

    #[test]
    fn short_rows_are_padded() {
        let rows =
            read_connections("A,B\n".as_bytes(), &NetworkConfig::new("unused")).unwrap();
        assert_eq!(rows[0].connection.cost, "");
    }

    #[test]
    fn header_row_is_skipped() {
        let config = NetworkConfig::new("unused")
            .with_headers(true)
            .with_delimiter(b';');
        let rows = read_connections("from;to;price\nA;B;3\n".as_bytes(), &config).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].connection.station, "A");
        assert_eq!(rows[0].connection.cost, "3");
    }

    #[test]
    fn cost_parsing() {
        assert_eq!(parse_cost("12"), Some(12));
        assert_eq!(parse_cost("-1"), Some(-1));
        assert_eq!(parse_cost("twelve"), None);
        assert_eq!(parse_cost(""), None);
    }
}
