// File: crates/rankchart-core/src/error.rs
// Summary: Error type shared by parsing, domain computation and surface painting.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A date token did not match the configured format.
    #[error("invalid date token `{token}` (expected format `{format}`)")]
    InvalidDate { token: String, format: String },

    /// The payload did not have one of the two supported shapes, or broke a series invariant.
    #[error("malformed payload: {0}")]
    Payload(String),

    #[error("no data: {0}")]
    NoData(String),

    #[error("surface error: {0}")]
    Surface(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ChartError {
    /// Whether this error belongs to the parse family (bad token or bad payload shape).
    pub fn is_parse(&self) -> bool {
        matches!(self, ChartError::InvalidDate { .. } | ChartError::Payload(_))
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartError::NoData(_))
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Payload(err.to_string())
    }
}
