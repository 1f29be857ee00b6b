// File: crates/rankchart-fetch/src/endpoint.rs
// Summary: Endpoint addressing: primary data URL and the derived detail URL.

use reqwest::Url;

use crate::error::{RenderError, RenderResult};

/// Suffix appended to the primary path to reach the detail endpoint.
pub const DETAIL_SUFFIX: &str = "_callback";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub primary: Url,
    pub detail: Url,
}

impl Endpoint {
    /// `path` is resolved against `base`; the detail URL appends `suffix` to the resolved path,
    /// keeping any query string.
    pub fn new(base: &str, path: &str, suffix: &str) -> RenderResult<Self> {
        let base = Url::parse(base).map_err(|e| RenderError::Endpoint(format!("{base}: {e}")))?;
        let primary = base
            .join(path)
            .map_err(|e| RenderError::Endpoint(format!("{path}: {e}")))?;
        let mut detail = primary.clone();
        let detail_path = format!("{}{}", primary.path(), suffix);
        detail.set_path(&detail_path);
        Ok(Self { primary, detail })
    }

    pub fn with_default_suffix(base: &str, path: &str) -> RenderResult<Self> {
        Self::new(base, path, DETAIL_SUFFIX)
    }
}
