// File: crates/rankchart-fetch/src/lib.rs
// Summary: Fetch crate entry point; a ChartOrchestrator pulls a payload from a RankSource, paints it onto a
// host-owned surface and, for the smoothed variant, posts the payload back and injects the answer into a DetailRegion.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod orchestrator;
pub mod region;
pub mod source;

pub use config::{load_chart_config, ChartConfig};
pub use endpoint::{Endpoint, DETAIL_SUFFIX};
pub use error::{ErrorKind, RenderError, RenderResult};
pub use orchestrator::{ChartOrchestrator, ChartState, Generation, RenderedChart};
pub use region::{DetailRegion, MemoryRegion};
pub use source::{unwrap_json_string, HttpSource, RankSource};
