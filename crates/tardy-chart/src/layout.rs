// File: crates/tardy-chart/src/layout.rs
// Summary: Bar geometry, tooltip text, and the click-through URL template.

use crate::scale::LinearScale;
use crate::task::TaskAgePoint;

/// Resting bar width in pixels.
pub const BAR_WIDTH: f64 = 2.0;

pub const TASK_URL_BASE: &str = "https://wunderlist.com/#/tasks/";

/// Click-through target for one task. The id is substituted verbatim.
pub fn task_url(id: u64) -> String {
    format!("{TASK_URL_BASE}{id}")
}

/// One rectangular bar in plot space (origin at the top-left of the plot
/// area, inside the margins). `x`/`y` are the top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub id: u64,
    pub days: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bar {
    /// Tooltip text: `"<id>,<days>"`.
    pub fn tooltip(&self) -> String {
        format!("{},{}", self.id, self.days)
    }

    pub fn url(&self) -> String {
        task_url(self.id)
    }
}

/// Compute the bar list for a point sequence under the given scales.
///
/// The top edge is `sy(max(0, days))`: a bar never extends above the zero
/// baseline, so negative-days bars hang below it with the top pinned at
/// `sy(0)`. Height is `|sy(days) - sy(0)|`, zero when days == 0.
pub fn layout_bars(points: &[TaskAgePoint], sx: &LinearScale, sy: &LinearScale) -> Vec<Bar> {
    points
        .iter()
        .map(|p| {
            let days = p.days as f64;
            Bar {
                id: p.id,
                days: p.days,
                x: sx.to_px(p.id as f64),
                y: sy.to_px(days.max(0.0)),
                width: BAR_WIDTH,
                height: (sy.to_px(days) - sy.to_px(0.0)).abs(),
            }
        })
        .collect()
}
