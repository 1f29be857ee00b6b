// File: crates/rankchart-fetch/src/orchestrator.rs
// Summary: Fetch -> domain -> render -> detail state machine for one chart instance, with generation tokens.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rankchart_core::{Chart, ChartOptions, Surface, TimeParser, WirePayload};

use crate::error::{ErrorKind, RenderError, RenderResult};
use crate::region::DetailRegion;
use crate::source::RankSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    Idle,
    Fetching,
    DomainReady,
    Rendered,
    DetailFetching,
    Complete,
    Failed(ErrorKind),
}

impl ChartState {
    pub fn is_terminal(self) -> bool {
        matches!(self, ChartState::Complete | ChartState::Failed(_))
    }
}

/// Initialization counter shared by every run that targets the same surface.
/// Starting a run invalidates all earlier tickets.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::SeqCst) == ticket
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub chart: Chart,
    /// The payload as received; its bytes are what the detail request carried.
    pub payload: WirePayload,
    /// Injected detail content; `None` for variants without a detail exchange.
    pub detail: Option<String>,
    pub state: ChartState,
}

pub struct ChartOrchestrator<S, D, R> {
    source: S,
    surface: D,
    region: R,
    options: ChartOptions,
    parser: TimeParser,
    generation: Generation,
    state: ChartState,
    history: Vec<ChartState>,
}

impl<S, D, R> ChartOrchestrator<S, D, R>
where
    S: RankSource,
    D: Surface,
    R: DetailRegion,
{
    /// The surface's size wins over the size carried by `options`.
    pub fn new(source: S, surface: D, region: R, options: ChartOptions) -> Self {
        let (width, height) = surface.size();
        let options = ChartOptions { width, height, ..options };
        Self {
            source,
            surface,
            region,
            options,
            parser: TimeParser::default(),
            generation: Generation::new(),
            state: ChartState::Idle,
            history: vec![ChartState::Idle],
        }
    }

    pub fn with_generation(mut self, generation: Generation) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_parser(mut self, parser: TimeParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn state(&self) -> ChartState {
        self.state
    }

    /// Every state visited so far, starting with `Idle`.
    pub fn history(&self) -> &[ChartState] {
        &self.history
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn generation(&self) -> &Generation {
        &self.generation
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn region(&self) -> &R {
        &self.region
    }

    pub fn into_parts(self) -> (S, D, R) {
        (self.source, self.surface, self.region)
    }

    fn transition(&mut self, next: ChartState) {
        tracing::debug!("chart state {:?} -> {:?}", self.state, next);
        self.state = next;
        self.history.push(next);
    }

    fn fail(&mut self, err: RenderError) -> RenderError {
        tracing::warn!("chart run failed in {:?}: {}", self.state, err);
        self.transition(ChartState::Failed(err.kind()));
        err
    }

    fn ensure_current(&mut self, ticket: u64) -> RenderResult<()> {
        if self.generation.is_current(ticket) {
            Ok(())
        } else {
            Err(self.fail(RenderError::Superseded))
        }
    }

    /// Run the whole sequence once. The surface is painted at most once per run; a stale run
    /// (another initialization began meanwhile) stops without painting or injecting.
    /// A detail failure leaves the rendered chart on the surface.
    pub async fn run(&mut self) -> RenderResult<RenderedChart> {
        let ticket = self.generation.begin();
        self.transition(ChartState::Fetching);

        let payload = match self.source.fetch_payload().await {
            Ok(payload) => payload,
            Err(err) => return Err(self.fail(err)),
        };
        self.ensure_current(ticket)?;

        let chart = match Chart::from_payload(payload.payload(), &self.parser, self.options) {
            Ok(chart) => chart,
            Err(err) => return Err(self.fail(err.into())),
        };
        self.transition(ChartState::DomainReady);

        if let Err(err) = chart.draw_on(&mut self.surface) {
            return Err(self.fail(err.into()));
        }
        self.transition(ChartState::Rendered);
        tracing::info!("rendered {} series ({:?})", chart.series().len(), self.options.variant);

        if !self.options.variant.has_detail() {
            return Ok(RenderedChart { chart, payload, detail: None, state: self.state });
        }

        self.transition(ChartState::DetailFetching);
        let detail = match self.source.fetch_detail(&payload).await {
            Ok(detail) => detail,
            Err(err) => return Err(self.fail(err)),
        };
        self.ensure_current(ticket)?;

        self.region.replace(detail.clone());
        self.transition(ChartState::Complete);

        Ok(RenderedChart { chart, payload, detail: Some(detail), state: self.state })
    }
}
