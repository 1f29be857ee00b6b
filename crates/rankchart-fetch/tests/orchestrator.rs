// File: crates/rankchart-fetch/tests/orchestrator.rs
// Purpose: End-to-end fetch/render/detail runs against a local axum server.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use rankchart_core::{ChartOptions, RasterSurface, Surface, VectorSurface, WirePayload};
use rankchart_fetch::{
    ChartOrchestrator, ChartState, DetailRegion, Endpoint, ErrorKind, Generation, HttpSource, MemoryRegion,
    RankSource, RenderError, RenderResult,
};

const ASN_HISTORY: &str = r#"[["2014-01-01", 3], ["2014-01-08", 5], ["2014-01-15", 4]]"#;
const COUNTRY_HISTORY: &str = r#"{
    "AS3333": [["2014-01-01", 1], ["2014-01-05", 2]],
    "AS1103": [["2014-01-01", 2], ["2014-01-05", 1]]
}"#;
const DETAIL_MARKUP: &str = "<ul><li>AS3333</li><li>AS1103</li></ul>";

type Posted = Arc<Mutex<Option<String>>>;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Serve the literal body so tests can compare what comes back byte for byte.
fn json(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn record_detail(State(posted): State<Posted>, body: String) -> Json<String> {
    *posted.lock().unwrap() = Some(body);
    Json(DETAIL_MARKUP.to_string())
}

fn router(posted: Posted) -> Router {
    Router::new()
        .route("/json/asn_history", get(|| async { json(ASN_HISTORY) }))
        .route("/json/country_history", get(|| async { json(COUNTRY_HISTORY) }))
        .route("/json/country_history_callback", post(record_detail))
        .route("/json/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/json/broken_detail", get(|| async { json(COUNTRY_HISTORY) }))
        .route("/json/broken_detail_callback", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/json/empty_list", get(|| async { json("[]") }))
        .route("/json/empty_map", get(|| async { json("{}") }))
        .route("/json/bad_date", get(|| async { json(r#"[["01/01/2014", 3]]"#) }))
        .with_state(posted)
}

async fn http_source(path: &str) -> (HttpSource, Posted) {
    let posted = Posted::default();
    let base = serve(router(posted.clone())).await;
    let endpoint = Endpoint::with_default_suffix(&base, path).unwrap();
    (HttpSource::new(endpoint).unwrap(), posted)
}

#[tokio::test]
async fn stepped_chart_renders_without_detail() {
    let (source, posted) = http_source("/json/asn_history").await;
    let region = MemoryRegion::new();
    let mut orchestrator = ChartOrchestrator::new(
        source,
        RasterSurface::new(480, 250),
        region.clone(),
        ChartOptions::stepped(960, 500),
    );

    let rendered = orchestrator.run().await.unwrap();

    assert_eq!(rendered.state, ChartState::Rendered);
    assert_eq!(rendered.detail, None);
    assert_eq!(rendered.chart.series().len(), 1);
    assert_eq!((orchestrator.options().width, orchestrator.options().height), (480, 250));
    assert_eq!(
        orchestrator.history(),
        &[ChartState::Idle, ChartState::Fetching, ChartState::DomainReady, ChartState::Rendered]
    );
    let png = orchestrator.surface().contents().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    assert!(posted.lock().unwrap().is_none());
    assert_eq!(region.content(), None);
}

#[tokio::test]
async fn smoothed_chart_posts_payload_and_injects_detail() {
    let (source, posted) = http_source("/json/country_history").await;
    let region = MemoryRegion::new();
    let mut orchestrator = ChartOrchestrator::new(
        source,
        VectorSurface::new(960, 500),
        region.clone(),
        ChartOptions::smoothed(960, 500),
    );

    let rendered = orchestrator.run().await.unwrap();

    assert_eq!(rendered.state, ChartState::Complete);
    assert_eq!(rendered.detail.as_deref(), Some(DETAIL_MARKUP));
    assert_eq!(region.content().as_deref(), Some(DETAIL_MARKUP));
    assert_eq!(
        orchestrator.history(),
        &[
            ChartState::Idle,
            ChartState::Fetching,
            ChartState::DomainReady,
            ChartState::Rendered,
            ChartState::DetailFetching,
            ChartState::Complete,
        ]
    );

    let body = posted.lock().unwrap().clone().unwrap();
    assert_eq!(body, COUNTRY_HISTORY);
    assert_eq!(rendered.payload.bytes(), COUNTRY_HISTORY.as_bytes());

    let svg = orchestrator.surface().svg_text().unwrap();
    assert!(svg.contains("<svg"));
}

#[tokio::test]
async fn server_error_fails_before_painting() {
    let (source, _) = http_source("/json/broken").await;
    let mut orchestrator =
        ChartOrchestrator::new(source, RasterSurface::new(960, 500), MemoryRegion::new(), ChartOptions::default());

    let err = orchestrator.run().await.unwrap_err();

    assert!(matches!(err, RenderError::Status { status: 500, .. }));
    assert_eq!(orchestrator.state(), ChartState::Failed(ErrorKind::Fetch));
    assert!(orchestrator.surface().contents().is_none());
}

#[tokio::test]
async fn detail_failure_keeps_rendered_chart() {
    let (source, _) = http_source("/json/broken_detail").await;
    let region = MemoryRegion::new();
    let mut orchestrator = ChartOrchestrator::new(
        source,
        VectorSurface::new(960, 500),
        region.clone(),
        ChartOptions::smoothed(960, 500),
    );

    let err = orchestrator.run().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Fetch);
    assert_eq!(orchestrator.state(), ChartState::Failed(ErrorKind::Fetch));
    assert!(orchestrator.history().contains(&ChartState::Rendered));
    assert!(orchestrator.surface().contents().is_some());
    assert_eq!(region.content(), None);
}

#[tokio::test]
async fn empty_payloads_report_no_data() {
    for (path, options) in [
        ("/json/empty_list", ChartOptions::stepped(960, 500)),
        ("/json/empty_map", ChartOptions::smoothed(960, 500)),
    ] {
        let (source, _) = http_source(path).await;
        let mut orchestrator = ChartOrchestrator::new(source, RasterSurface::new(960, 500), MemoryRegion::new(), options);

        let err = orchestrator.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoData, "{path}");
        assert!(orchestrator.surface().contents().is_none(), "{path}");
    }
}

#[tokio::test]
async fn unparseable_date_is_a_parse_failure() {
    let (source, _) = http_source("/json/bad_date").await;
    let mut orchestrator =
        ChartOrchestrator::new(source, RasterSurface::new(960, 500), MemoryRegion::new(), ChartOptions::default());

    let err = orchestrator.run().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(
        orchestrator.history(),
        &[ChartState::Idle, ChartState::Fetching, ChartState::Failed(ErrorKind::Parse)]
    );
}

/// Source that simulates the host re-initializing the chart while the request is in flight.
struct ReinitDuringFetch {
    generation: Generation,
    payload: WirePayload,
}

#[async_trait]
impl RankSource for ReinitDuringFetch {
    async fn fetch_payload(&self) -> RenderResult<WirePayload> {
        self.generation.begin();
        Ok(self.payload.clone())
    }

    async fn fetch_detail(&self, _rendered: &WirePayload) -> RenderResult<String> {
        Ok(String::new())
    }
}

#[tokio::test]
async fn superseded_run_does_not_paint() {
    let generation = Generation::new();
    let source = ReinitDuringFetch {
        generation: generation.clone(),
        payload: WirePayload::from_bytes(ASN_HISTORY).unwrap(),
    };
    let mut orchestrator =
        ChartOrchestrator::new(source, RasterSurface::new(960, 500), MemoryRegion::new(), ChartOptions::default())
            .with_generation(generation);

    let err = orchestrator.run().await.unwrap_err();

    assert!(matches!(err, RenderError::Superseded));
    assert_eq!(orchestrator.state(), ChartState::Failed(ErrorKind::Superseded));
    assert!(orchestrator.surface().contents().is_none());
}

#[tokio::test]
async fn rerun_replaces_surface_and_region() {
    let (source, _) = http_source("/json/country_history").await;
    let region = MemoryRegion::new();
    let mut orchestrator = ChartOrchestrator::new(
        source,
        VectorSurface::new(320, 200),
        region.clone(),
        ChartOptions::smoothed(320, 200),
    );

    let first = orchestrator.run().await.unwrap();
    let first_svg = orchestrator.surface().contents().unwrap().to_vec();
    let second = orchestrator.run().await.unwrap();

    assert_eq!(first.state, ChartState::Complete);
    assert_eq!(second.state, ChartState::Complete);
    assert_eq!(orchestrator.surface().contents().unwrap(), first_svg.as_slice());
    assert_eq!(region.content().as_deref(), Some(DETAIL_MARKUP));
}

#[tokio::test]
async fn payload_shape_must_match_variant() {
    let (source, _) = http_source("/json/country_history").await;
    let mut orchestrator =
        ChartOrchestrator::new(source, RasterSurface::new(960, 500), MemoryRegion::new(), ChartOptions::stepped(960, 500));

    let err = orchestrator.run().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(orchestrator.surface().contents().is_none());
}
