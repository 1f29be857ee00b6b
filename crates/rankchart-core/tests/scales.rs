// File: crates/rankchart-core/tests/scales.rs
// Purpose: Time and rank scale mapping: endpoints, inversion, monotonicity.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rankchart_core::geometry::PlotArea;
use rankchart_core::{Domain, Margins, Scale, Scales, TimeRange, TimeScale, ValueRange, ValueScale};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn time_scale_maps_extent_to_plot_width() {
    let s = TimeScale::new(TimeRange { min: ymd(2020, 1, 1), max: ymd(2020, 1, 11) }, 0.0, 500.0);
    assert_eq!(s.date_to_px(ymd(2020, 1, 1)), 0.0);
    assert_eq!(s.date_to_px(ymd(2020, 1, 11)), 500.0);
    assert!((s.date_to_px(ymd(2020, 1, 6)) - 250.0).abs() < 1e-3);
    assert_eq!(s.px_to_date(250.0), Some(ymd(2020, 1, 6)));
}

#[test]
fn value_scale_puts_best_rank_on_top() {
    let s = ValueScale::new(ValueRange { min: 5.0, max: 10.0 }, 0.0, 450.0);
    assert_eq!(s.to_px(5.0), 0.0);
    assert_eq!(s.to_px(10.0), 450.0);
    assert!(s.to_px(6.0) < s.to_px(7.0));
    assert!((s.from_px(225.0) - 7.5).abs() < 1e-6);
}

#[test]
fn degenerate_ranges_are_padded_before_mapping() {
    let day = ymd(2020, 1, 1);
    let x = TimeScale::new(TimeRange { min: day, max: day }, 0.0, 100.0);
    assert_eq!(x.time_range().min, ymd(2019, 12, 31));
    assert!((x.date_to_px(day) - 50.0).abs() < 1e-4);

    let y = ValueScale::new(ValueRange { min: 3.0, max: 3.0 }, 0.0, 100.0);
    assert_eq!(y.domain(), (2.0, 4.0));
    assert!((y.to_px(3.0) - 50.0).abs() < 1e-4);
}

#[test]
fn scales_are_plot_local() {
    let domain = Domain {
        time: TimeRange { min: ymd(2020, 1, 1), max: ymd(2020, 3, 1) },
        value: ValueRange { min: 1.0, max: 20.0 },
    };
    let plot = PlotArea::from_surface(960, 500, &Margins::stepped());
    let scales = Scales::build(&domain, &plot);
    assert_eq!(scales.x.range(), (0.0, 890.0));
    assert_eq!(scales.y.range(), (0.0, 450.0));
}

#[test]
fn collapsed_plot_keeps_one_pixel() {
    let plot = PlotArea::from_surface(40, 20, &Margins::smoothed());
    assert_eq!((plot.width, plot.height), (1.0, 1.0));
    assert_eq!((plot.left, plot.top), (50.0, 20.0));
}

proptest! {
    #[test]
    fn time_scale_is_strictly_increasing(
        start in 0i64..20_000,
        span in 1u64..3_650,
        a in 0u64..3_650,
        b in 0u64..3_650,
        width in 10.0f32..2_000.0
    ) {
        let min = ymd(1970, 1, 1).checked_add_days(Days::new(start as u64)).unwrap();
        let max = min.checked_add_days(Days::new(span)).unwrap();
        let s = TimeScale::new(TimeRange { min, max }, 0.0, width);
        let (a, b) = (a % (span + 1), b % (span + 1));
        prop_assume!(a != b);
        let (lo, hi) = (a.min(b), a.max(b));
        let d_lo = min.checked_add_days(Days::new(lo)).unwrap();
        let d_hi = min.checked_add_days(Days::new(hi)).unwrap();
        prop_assert!(s.date_to_px(d_lo) < s.date_to_px(d_hi));
        prop_assert!(s.date_to_px(d_lo) >= 0.0 && s.date_to_px(d_hi) <= width + 1e-3);
    }

    #[test]
    fn lower_rank_is_never_below_higher_rank(
        vmin in 0.0f64..1_000.0,
        extra in 0.0f64..1_000.0,
        r1 in 0.0f64..1.0,
        r2 in 0.0f64..1.0,
        height in 10.0f32..2_000.0
    ) {
        let vmax = vmin + extra;
        let s = ValueScale::new(ValueRange { min: vmin, max: vmax }, 0.0, height);
        let (lo, hi) = s.domain();
        let a = lo + (hi - lo) * r1.min(r2);
        let b = lo + (hi - lo) * r1.max(r2);
        prop_assert!(s.to_px(a) <= s.to_px(b));
        prop_assert!((s.to_px(lo) - 0.0).abs() < 1e-3);
        prop_assert!((s.to_px(hi) - height).abs() < 1e-2);
    }

    #[test]
    fn value_scale_round_trips(vmin in 0.0f64..500.0, extra in 1.0f64..500.0, r in 0.0f64..1.0) {
        let s = ValueScale::new(ValueRange { min: vmin, max: vmin + extra }, 0.0, 400.0);
        let v = vmin + extra * r;
        let back = s.from_px(s.to_px(v));
        prop_assert!((back - v).abs() <= extra * 1e-4);
    }
}
