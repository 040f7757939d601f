use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoError {
    /// An attribute was asked for a value it has no extraction logic for.
    #[error("Unsupported criterion: {0}")]
    UnsupportedCriterion(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NeoError>;
