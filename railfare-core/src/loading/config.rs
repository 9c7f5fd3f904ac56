use std::path::PathBuf;

/// Where to find the fare table and how to read it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// CSV file with `station, connected station, cost` rows
    pub csv_path: PathBuf,
    /// Skip the first row of the file
    pub has_headers: bool,
    /// Field separator
    pub delimiter: u8,
}

impl NetworkConfig {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            has_headers: false,
            delimiter: b',',
        }
    }

    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
