// File: crates/rankchart-fetch/src/error.rs
// Summary: Error types for the fetch/render sequence and their coarse classification.

use rankchart_core::ChartError;
use thiserror::Error;

/// Coarse classification used by hosts that only care which stage failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
    NoData,
    Surface,
    Superseded,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("a newer chart initialization superseded this run")]
    Superseded,
}

impl RenderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenderError::Fetch(_) | RenderError::Status { .. } | RenderError::Endpoint(_) => ErrorKind::Fetch,
            RenderError::Chart(e) if e.is_parse() => ErrorKind::Parse,
            RenderError::Chart(e) if e.is_no_data() => ErrorKind::NoData,
            RenderError::Chart(_) => ErrorKind::Surface,
            RenderError::Superseded => ErrorKind::Superseded,
        }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
