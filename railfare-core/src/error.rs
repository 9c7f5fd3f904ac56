use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid weight '{weight}' for connection {from} - {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },
    #[error("Unknown station: {0}")]
    UnknownNode(String),
    #[error("Source station not found: {0}")]
    SourceNotFound(String),
    #[error("Distance table was computed from {expected}, not from {found}")]
    SourceMismatch { expected: String, found: String },
    #[error("{to} is unreachable from {from}")]
    DestinationUnreachable { from: String, to: String },
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
