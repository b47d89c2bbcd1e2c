// File: crates/tardy-chart/tests/axis.rs
// Purpose: Validate tick layout counts, endpoint positions, and label formatting.

use tardy_chart::axis::{ticks, X_TICKS, Y_TICKS};
use tardy_chart::task::TaskAgePoint;
use tardy_chart::{LinearScale, TaskAgeChart, Viewport};

#[test]
fn default_tick_counts() {
    assert_eq!(X_TICKS, 10);
    assert_eq!(Y_TICKS, 6);
    let s = LinearScale::new((0.0, 9.0), (0.0, 1090.0));
    assert_eq!(ticks(&s, X_TICKS).len(), 10);
    assert_eq!(ticks(&s, Y_TICKS).len(), 6);
}

#[test]
fn first_and_last_tick_sit_on_the_plot_edges() {
    let vp = Viewport::default();
    let chart = TaskAgeChart::new(vec![
        TaskAgePoint::new(1, 5),
        TaskAgePoint::new(2, -3),
    ]);
    let (sx, sy) = chart.scales(&vp);

    let xt = ticks(&sx, X_TICKS);
    assert_eq!(xt.first().unwrap().value, 1.0);
    assert_eq!(xt.first().unwrap().px, 0.0);
    assert_eq!(xt.last().unwrap().value, 2.0);
    assert_eq!(xt.last().unwrap().px, vp.inner_width() as f64);

    // inverted vertical range: the min-days tick sits at inner_height
    let yt = ticks(&sy, Y_TICKS);
    assert_eq!(yt.first().unwrap().value, -3.0);
    assert_eq!(yt.first().unwrap().px, vp.inner_height() as f64);
    assert_eq!(yt.last().unwrap().value, 5.0);
    assert_eq!(yt.last().unwrap().px, 0.0);
}

#[test]
fn ticks_are_evenly_spaced_in_the_domain() {
    let s = LinearScale::new((0.0, 8.0), (0.0, 800.0));
    let t = ticks(&s, 5);
    let values: Vec<f64> = t.iter().map(|tk| tk.value).collect();
    assert_eq!(values, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn fewer_than_two_ticks_collapses_to_the_endpoints() {
    let s = LinearScale::new((3.0, 7.0), (0.0, 100.0));
    for count in [0, 1, 2] {
        let t = ticks(&s, count);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].value, 3.0);
        assert_eq!(t[1].value, 7.0);
    }
}

#[test]
fn integer_values_label_without_a_fraction() {
    let s = LinearScale::new((-2.0, 2.0), (0.0, 100.0));
    let t = ticks(&s, 5);
    let labels: Vec<&str> = t.iter().map(|tk| tk.label.as_str()).collect();
    assert_eq!(labels, vec!["-2", "-1", "0", "1", "2"]);
}

#[test]
fn fractional_values_keep_one_decimal() {
    let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
    let t = ticks(&s, 3);
    assert_eq!(t[1].value, 0.5);
    assert_eq!(t[1].label, "0.5");
}
