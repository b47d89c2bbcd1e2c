// File: crates/tardy-chart/src/axis.rs
// Summary: Axis tick layout derived from a scale.

use crate::scale::LinearScale;

/// Default tick counts for the bottom and left axes.
pub const X_TICKS: usize = 10;
pub const Y_TICKS: usize = 6;

/// One tick mark: domain value, pixel position along the axis, label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f64,
    pub label: String,
}

/// Evenly spaced tick marks across the scale's domain.
/// `count < 2` collapses to the two domain endpoints.
pub fn ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let steps = count.max(2);
    let step = (scale.d1 - scale.d0) / (steps as f64 - 1.0);
    (0..steps)
        .map(|i| {
            let value = scale.d0 + step * i as f64;
            Tick { value, px: scale.to_px(value), label: format_tick(value) }
        })
        .collect()
}

/// Integer-looking values print without a fraction; others keep one decimal.
fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}
