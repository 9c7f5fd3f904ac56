use serde::Deserialize;

/// One fare table row as it appears in the file.
/// Fields are read by position, so header names do not matter.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConnection {
    pub station: String,
    pub connected_station: String,
    pub cost: String,
}
