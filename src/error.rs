use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] railfare_core::Error),
    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("No fare table given; pass --network or set `network` in the config file")]
    MissingNetwork,
    #[error("Delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
