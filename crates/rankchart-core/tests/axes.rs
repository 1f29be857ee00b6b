// File: crates/rankchart-core/tests/axes.rs
// Purpose: Axis output for both styles: tick placement, frame, title and idempotence.

use chrono::NaiveDate;
use rankchart_core::axis::RANK_TITLE;
use rankchart_core::scene::{TextAlign, TextBaseline};
use rankchart_core::{AxisRenderer, AxisStyle, EvenTicks, Scale, Scene, TimeRange, TimeScale, ValueRange, ValueScale};
use rankchart_core::{Rgba, Theme};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scales() -> (TimeScale, ValueScale) {
    (
        TimeScale::new(TimeRange { min: ymd(2020, 1, 1), max: ymd(2020, 1, 3) }, 0.0, 890.0),
        ValueScale::new(ValueRange { min: 5.0, max: 10.0 }, 0.0, 450.0),
    )
}

fn render(axes: &AxisRenderer) -> Scene {
    let (x, y) = scales();
    let mut scene = Scene::new(960, 500, (50.0, 20.0), Rgba::rgb(255, 255, 255));
    let theme = Theme::light();
    axes.render_time_axis(&x, 450.0, &theme, &mut scene);
    axes.render_value_axis(&y, 890.0, &theme, &mut scene);
    scene
}

#[test]
fn time_ticks_stay_inside_domain() {
    let (x, _) = scales();
    let ticks = AxisRenderer::framed().x_ticks(&x);
    assert!(!ticks.is_empty() && ticks.len() <= 10);
    for t in &ticks {
        assert!(t.px >= 0.0 && t.px <= 890.0, "{t:?}");
    }
    assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("2020"));
}

#[test]
fn rank_ticks_are_whole_and_top_down() {
    let (_, y) = scales();
    let ticks = AxisRenderer::framed().y_ticks(&y);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["5", "6", "7", "8", "9", "10"]);
    assert_eq!(ticks[0].px, 0.0);
    assert!(ticks.windows(2).all(|w| w[0].px < w[1].px));
}

#[test]
fn custom_selector_replaces_nice_ticks() {
    let (_, y) = scales();
    let axes = AxisRenderer::open().with_rank_selector(EvenTicks);
    let ticks = axes.y_ticks(&y);
    assert_eq!(ticks.len(), 10);
    assert_eq!(ticks[1].label, "5.6");
}

#[test]
fn framed_style_outlines_plot() {
    let scene = render(&AxisRenderer::framed());

    let frame: Vec<_> = scene.rects().collect();
    assert_eq!(frame.len(), 1);
    assert_eq!((frame[0].left, frame[0].top, frame[0].width, frame[0].height), (0.0, 0.0, 890.0, 450.0));
    assert!(scene.lines().any(|l| l.from == (0.0, 450.0) && l.to == (890.0, 450.0)));
    assert_eq!(scene.paths().count(), 0);

    let title = scene.texts().find(|t| t.text == RANK_TITLE).unwrap();
    assert!(title.bold);
    assert_eq!((title.x, title.y, title.rotation_deg), (10.0, 10.0, -90.0));
    assert_eq!((title.align, title.baseline), (TextAlign::Right, TextBaseline::Top));
}

#[test]
fn open_style_draws_domain_paths() {
    let scene = render(&AxisRenderer::open());

    assert_eq!(scene.rects().count(), 0);
    assert_eq!(scene.paths().count(), 2);
    let title = scene.texts().find(|t| t.text == RANK_TITLE).unwrap();
    assert!(!title.bold);
    assert_eq!((title.x, title.y), (6.0, 0.0));
}

#[test]
fn tick_marks_and_labels_line_up() {
    let axes = AxisRenderer::framed();
    let (x, y) = scales();
    let scene = render(&axes);

    for tick in axes.x_ticks(&x) {
        assert!(scene.lines().any(|l| l.from == (tick.px, 450.0) && l.to == (tick.px, 456.0)));
        let label = scene.texts().find(|t| t.text == tick.label).unwrap();
        assert_eq!((label.x, label.align, label.baseline), (tick.px, TextAlign::Center, TextBaseline::Top));
    }
    for tick in axes.y_ticks(&y) {
        assert!(scene.lines().any(|l| l.from == (0.0, tick.px) && l.to == (-6.0, tick.px)));
        let label = scene.texts().find(|t| t.text == tick.label).unwrap();
        assert_eq!((label.x, label.y), (-9.0, tick.px));
        assert_eq!(label.align, TextAlign::Right);
    }
}

#[test]
fn rendering_twice_gives_the_same_scene() {
    let axes = AxisRenderer::open();
    assert_eq!(render(&axes), render(&axes));
}

#[test]
fn ticks_track_scale_range() {
    let (x, _) = scales();
    let ticks = AxisRenderer::new(AxisStyle::Framed, rankchart_core::Axis::with_ticks(2), rankchart_core::Axis::with_ticks(2))
        .x_ticks(&x);
    assert!(ticks.len() <= 2);
    let (lo, hi) = x.range();
    assert!(ticks.iter().all(|t| t.px >= lo && t.px <= hi));
}
