// File: crates/demo/src/main.rs
// Summary: Demo renders a rank history either from a JSON file or through the configured endpoints.

use anyhow::{Context, Result};
use rankchart_core::{Chart, ChartOptions, ChartVariant, Payload, RasterSurface, Surface, TimeParser, VectorSurface};
use rankchart_fetch::{load_chart_config, ChartOrchestrator, DetailRegion, HttpSource, MemoryRegion};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // First arg: a payload file (*.json) or a config name; second: output directory.
    let input = std::env::args().nth(1).unwrap_or_else(|| "config/chart".to_string());
    let out_dir = PathBuf::from(std::env::args().nth(2).unwrap_or_else(|| "target/out".to_string()));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("failed to create {}", out_dir.display()))?;

    if input.ends_with(".json") {
        render_file(Path::new(&input), &out_dir)
    } else {
        render_remote(&input, &out_dir).await
    }
}

/// Offline mode: render a saved payload in the variant its shape calls for.
fn render_file(path: &Path, out_dir: &Path) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    let payload = Payload::from_slice(&bytes).with_context(|| format!("failed to decode '{}'", path.display()))?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");

    let variant = if payload.is_multi() { ChartVariant::Smoothed } else { ChartVariant::Stepped };
    let options = ChartOptions::new(variant, rankchart_core::types::WIDTH, rankchart_core::types::HEIGHT);
    let chart = Chart::from_payload(&payload, &TimeParser::default(), options)?;

    let png = out_dir.join(format!("{stem}.png"));
    chart.render_to_png(&png)?;
    chart.render_to_svg(png.with_extension("svg"))?;
    tracing::info!("wrote {} ({:?})", png.display(), variant);
    Ok(())
}

/// Online mode: fetch, render and inject the detail content as configured.
async fn render_remote(config_name: &str, out_dir: &Path) -> Result<()> {
    let config = load_chart_config(config_name).with_context(|| format!("failed to load config '{config_name}'"))?;
    let endpoint = config.endpoint()?;
    tracing::info!("primary {} / detail {}", endpoint.primary, endpoint.detail);

    let options = config.chart_options();
    let source = HttpSource::new(endpoint)?;
    let region = MemoryRegion::new();
    let surface: Box<dyn Surface> = match options.variant {
        ChartVariant::Stepped => Box::new(RasterSurface::new(options.width, options.height)),
        ChartVariant::Smoothed => Box::new(VectorSurface::new(options.width, options.height)),
    };
    let file_name = match options.variant {
        ChartVariant::Stepped => "chart.png",
        ChartVariant::Smoothed => "chart.svg",
    };
    let mut orchestrator = ChartOrchestrator::new(source, surface, region.clone(), options);

    let outcome = orchestrator.run().await;
    tracing::info!("finished in state {:?}", orchestrator.state());

    // A detail failure still leaves a painted chart behind.
    if let Some(contents) = orchestrator.surface().contents() {
        let path = out_dir.join(file_name);
        std::fs::write(&path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
    }
    if let Some(detail) = region.content() {
        let path = out_dir.join("detail.html");
        std::fs::write(&path, detail).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("wrote {}", path.display());
    }

    outcome?;
    Ok(())
}
