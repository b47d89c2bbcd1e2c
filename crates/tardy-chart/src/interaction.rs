// File: crates/tardy-chart/src/interaction.rs
// Summary: Hover/click interaction state. Poll-driven: the host ticks, the chart reads.

use std::time::Duration;

use crate::layout::{Bar, BAR_WIDTH};

/// Width a bar grows to while hovered, in pixels.
pub const HOVER_WIDTH: f64 = 10.0;
/// Fill opacity while hovered (resting opacity is 1.0).
pub const HOVER_OPACITY: f64 = 0.5;
/// Duration of the enter/leave transition.
pub const TRANSITION: Duration = Duration::from_millis(200);

/// A scalar tween. Retargeting mid-flight restarts the clock from the
/// current value, so a quick enter/leave never snaps.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    elapsed: Duration,
}

impl Tween {
    fn settled(v: f64) -> Self {
        Self { from: v, to: v, elapsed: TRANSITION }
    }

    fn retarget(&mut self, to: f64) {
        if (self.to - to).abs() < f64::EPSILON && self.elapsed >= TRANSITION {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }

    fn tick(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(TRANSITION);
    }

    fn value(&self) -> f64 {
        let t = (self.elapsed.as_secs_f64() / TRANSITION.as_secs_f64()).min(1.0);
        self.from + (self.to - self.from) * t
    }

    fn settled_now(&self) -> bool {
        self.elapsed >= TRANSITION
    }
}

/// At most one bar is hovered at a time; its width and fill opacity animate
/// between the resting and hovered values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverState {
    hovered: Option<usize>,
    /// Bar whose visuals follow the tweens. Outlives `hovered` while the
    /// leave transition shrinks the bar back.
    active: Option<usize>,
    width: Tween,
    opacity: Tween,
}

impl Default for HoverState {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverState {
    pub fn new() -> Self {
        Self {
            hovered: None,
            active: None,
            width: Tween::settled(BAR_WIDTH),
            opacity: Tween::settled(1.0),
        }
    }

    /// Pointer entered the bar at `index`. Entering the already-hovered bar
    /// is a no-op.
    pub fn pointer_enter(&mut self, index: usize) {
        if self.hovered == Some(index) {
            return;
        }
        // Moving straight from one bar to another: the new bar gets its own
        // enter transition from rest, it does not inherit the old bar's tween.
        let switched = self.hovered.is_some();
        self.hovered = Some(index);
        self.active = Some(index);
        if switched {
            self.width = Tween { from: BAR_WIDTH, to: HOVER_WIDTH, elapsed: Duration::ZERO };
            self.opacity = Tween { from: 1.0, to: HOVER_OPACITY, elapsed: Duration::ZERO };
        } else {
            self.width.retarget(HOVER_WIDTH);
            self.opacity.retarget(HOVER_OPACITY);
        }
    }

    /// Pointer left the hovered bar.
    pub fn pointer_leave(&mut self) {
        if self.hovered.is_none() {
            return;
        }
        self.hovered = None;
        self.width.retarget(BAR_WIDTH);
        self.opacity.retarget(1.0);
    }

    /// Advance the animation clock.
    pub fn tick(&mut self, dt: Duration) {
        self.width.tick(dt);
        self.opacity.tick(dt);
        if self.hovered.is_none() && !self.animating() {
            self.active = None;
        }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Current animated width of the hovered bar (or of the bar still
    /// shrinking back after a leave).
    pub fn width(&self) -> f64 {
        self.width.value()
    }

    /// Current animated fill opacity, 1.0 at rest.
    pub fn opacity(&self) -> f64 {
        self.opacity.value()
    }

    /// True while a transition is in flight; hosts can keep redrawing until
    /// this settles.
    pub fn animating(&self) -> bool {
        !(self.width.settled_now() && self.opacity.settled_now())
    }

    /// Effective on-screen width for the bar at `index`.
    pub fn width_of(&self, index: usize, bar: &Bar) -> f64 {
        if self.active == Some(index) { self.width.value() } else { bar.width }
    }

    /// Effective fill opacity for the bar at `index`.
    pub fn opacity_of(&self, index: usize) -> f64 {
        if self.active == Some(index) { self.opacity.value() } else { 1.0 }
    }
}

/// Find the bar under a plot-space pixel, honoring the hovered bar's
/// widened extent. Later bars win ties, matching paint order.
pub fn hit_test(bars: &[Bar], hover: &HoverState, px: f64, py: f64) -> Option<usize> {
    let mut hit = None;
    for (i, b) in bars.iter().enumerate() {
        let w = hover.width_of(i, b);
        if px >= b.x && px <= b.x + w && py >= b.y && py <= b.y + b.height {
            hit = Some(i);
        }
    }
    hit
}

/// A request to open an external URL in a new browsing context. The library
/// never opens anything itself; hosts decide how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

/// Click on the bar at `index`.
pub fn click(bars: &[Bar], index: usize) -> Option<Navigation> {
    bars.get(index).map(|b| Navigation { url: b.url() })
}
