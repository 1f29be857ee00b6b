// File: crates/rankchart-fetch/src/config.rs
// Summary: Chart configuration from a TOML file with RANKCHART_* environment overrides.

use rankchart_core::theme;
use rankchart_core::{ChartOptions, ChartVariant, Margins, StepPosition};
use serde::Deserialize;

use crate::endpoint::{Endpoint, DETAIL_SUFFIX};
use crate::error::RenderResult;

/// Host-side description of one chart: where its data lives and how it is drawn.
#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub base_url: String,
    pub path: String,
    pub variant: ChartVariant,
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default)]
    pub margins: Option<Margins>,
    #[serde(default = "default_detail_suffix")]
    pub detail_suffix: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub step: StepPosition,
}

fn default_width() -> i32 {
    rankchart_core::types::WIDTH
}

fn default_height() -> i32 {
    rankchart_core::types::HEIGHT
}

fn default_detail_suffix() -> String {
    DETAIL_SUFFIX.to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

impl ChartConfig {
    pub fn endpoint(&self) -> RenderResult<Endpoint> {
        Endpoint::new(&self.base_url, &self.path, &self.detail_suffix)
    }

    pub fn chart_options(&self) -> ChartOptions {
        let opts = ChartOptions::new(self.variant, self.width, self.height)
            .with_theme(theme::find(&self.theme))
            .with_step(self.step);
        match self.margins {
            Some(m) => opts.with_margins(m),
            None => opts,
        }
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }
}

/// Load a chart config file, with `RANKCHART_*` environment variables taking precedence.
pub fn load_chart_config(path: &str) -> Result<ChartConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path))
        .add_source(config::Environment::with_prefix("RANKCHART"))
        .build()?;

    settings.try_deserialize()
}
