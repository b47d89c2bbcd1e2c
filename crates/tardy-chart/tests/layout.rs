// File: crates/tardy-chart/tests/layout.rs
// Purpose: Validate bar geometry, the zero-baseline clamp, tooltips, and URLs.

use tardy_chart::task::TaskAgePoint;
use tardy_chart::{layout_bars, task_url, LinearScale, TaskAgeChart, Viewport};

fn scales() -> (LinearScale, LinearScale) {
    // ids 0..10, days -10..10, 450px tall plot
    (
        LinearScale::new((0.0, 10.0), (0.0, 1090.0)),
        LinearScale::new((-10.0, 10.0), (450.0, 0.0)),
    )
}

#[test]
fn bar_with_zero_days_has_zero_height() {
    let (sx, sy) = scales();
    let bars = layout_bars(&[TaskAgePoint::new(4, 0)], &sx, &sy);
    assert_eq!(bars[0].height, 0.0);
    assert_eq!(bars[0].y, sy.to_px(0.0));
}

#[test]
fn positive_days_bar_rises_from_the_baseline() {
    let (sx, sy) = scales();
    let bars = layout_bars(&[TaskAgePoint::new(4, 6)], &sx, &sy);
    let b = &bars[0];
    assert_eq!(b.y, sy.to_px(6.0));
    assert!((b.height - (sy.to_px(6.0) - sy.to_px(0.0)).abs()).abs() < 1e-9);
    // top edge above the baseline, bottom edge on it
    assert!((b.y + b.height - sy.to_px(0.0)).abs() < 1e-9);
}

#[test]
fn negative_days_bar_hangs_below_pinned_top() {
    let (sx, sy) = scales();
    let bars = layout_bars(&[TaskAgePoint::new(4, -5)], &sx, &sy);
    let b = &bars[0];
    // max(0, days) clamp pins the top edge at the zero baseline
    assert_eq!(b.y, sy.to_px(0.0));
    assert!((b.height - (sy.to_px(-5.0) - sy.to_px(0.0)).abs()).abs() < 1e-9);
}

#[test]
fn bars_are_two_pixels_wide_at_rest() {
    let (sx, sy) = scales();
    let bars = layout_bars(&[TaskAgePoint::new(0, 1), TaskAgePoint::new(10, 2)], &sx, &sy);
    assert!(bars.iter().all(|b| b.width == 2.0));
    assert_eq!(bars[0].x, 0.0);
    assert_eq!(bars[1].x, 1090.0);
}

#[test]
fn tooltip_is_id_comma_days() {
    let (sx, sy) = scales();
    let bars = layout_bars(&[TaskAgePoint::new(7, -2)], &sx, &sy);
    assert_eq!(bars[0].tooltip(), "7,-2");
}

#[test]
fn click_through_url_substitutes_id_verbatim() {
    assert_eq!(task_url(42), "https://wunderlist.com/#/tasks/42");
    let (sx, sy) = scales();
    let bars = layout_bars(&[TaskAgePoint::new(42, 1)], &sx, &sy);
    assert_eq!(bars[0].url(), "https://wunderlist.com/#/tasks/42");
}

#[test]
fn chart_bars_match_direct_layout() {
    let vp = Viewport::default();
    let points = vec![TaskAgePoint::new(1, 5), TaskAgePoint::new(2, -3)];
    let chart = TaskAgeChart::new(points.clone());
    let (sx, sy) = chart.scales(&vp);
    assert_eq!(chart.bars(&vp), layout_bars(&points, &sx, &sy));
}
