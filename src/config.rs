//! Fare table settings from an optional TOML file, overridden by flags

use std::path::{Path, PathBuf};

use railfare_core::loading::NetworkConfig;
use serde::Deserialize;

use crate::error::AppError;

/// Contents of a `railfare.toml` file
///
/// ```toml
/// network = "data/railway_network.csv"
/// has_headers = true
/// delimiter = ";"
/// ```
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub network: Option<PathBuf>,
    pub has_headers: Option<bool>,
    pub delimiter: Option<char>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, AppError> {
        let mut config: Self = toml::from_str(contents).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        // Relative network paths are resolved against the config file location
        if let (Some(network), Some(dir)) = (config.network.as_mut(), path.parent()) {
            if network.is_relative() {
                *network = dir.join(&*network);
            }
        }
        Ok(config)
    }
}

/// Options given on the command line, each one overriding the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub network: Option<PathBuf>,
    pub has_headers: bool,
    pub delimiter: Option<char>,
}

pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<NetworkConfig, AppError> {
    let csv_path = overrides
        .network
        .or(file.network)
        .ok_or(AppError::MissingNetwork)?;

    let delimiter = overrides.delimiter.or(file.delimiter).unwrap_or(',');
    if !delimiter.is_ascii() {
        return Err(AppError::InvalidDelimiter(delimiter));
    }

    Ok(NetworkConfig::new(csv_path)
        .with_headers(overrides.has_headers || file.has_headers.unwrap_or(false))
        .with_delimiter(delimiter as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            network: Some(PathBuf::from("from_file.csv")),
            has_headers: Some(false),
            delimiter: Some(';'),
        };
        let overrides = Overrides {
            network: Some(PathBuf::from("from_flag.csv")),
            has_headers: true,
            delimiter: None,
        };

        let config = resolve(file, overrides).unwrap();
        assert_eq!(config.csv_path, PathBuf::from("from_flag.csv"));
        assert!(config.has_headers);
        assert_eq!(config.delimiter, b';');
    }

    #[test]
    fn network_is_required() {
        assert!(matches!(
            resolve(FileConfig::default(), Overrides::default()),
            Err(AppError::MissingNetwork)
        ));
    }

    #[test]
    fn non_ascii_delimiter_is_rejected() {
        let overrides = Overrides {
            network: Some(PathBuf::from("fares.csv")),
            delimiter: Some('§'),
            ..Overrides::default()
        };
        assert!(matches!(
            resolve(FileConfig::default(), overrides),
            Err(AppError::InvalidDelimiter('§'))
        ));
    }

    #[test]
    fn parses_toml_relative_to_file() {
        let config = FileConfig::parse(
            "network = \"fares.csv\"\nhas_headers = true\ndelimiter = \"|\"\n",
            Path::new("/etc/railfare/railfare.toml"),
        )
        .unwrap();

        assert_eq!(
            config,
            FileConfig {
                network: Some(PathBuf::from("/etc/railfare/fares.csv")),
                has_headers: Some(true),
                delimiter: Some('|'),
            }
        );
    }

    #[test]
    fn unknown_keys_are_errors() {
        let err = FileConfig::parse("netwrok = \"x.csv\"", Path::new("railfare.toml"));
        assert!(matches!(err, Err(AppError::ConfigParse { .. })));
    }
}
