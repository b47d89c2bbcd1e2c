// File: crates/tardy-chart/src/scale.rs
// Summary: Linear domain-to-pixel scale with inversion and extent helpers.

/// Linear scale mapping domain [d0, d1] onto pixel range [r0, r1].
/// The range may be inverted (r0 > r1), which is the standard vertical
/// chart convention: larger values map to smaller y-pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (mut d0, mut d1) = domain;
        let (r0, r1) = range;
        if !d0.is_finite() || !d1.is_finite() {
            d0 = 0.0;
            d1 = 1.0;
        }
        // degenerate single-value domain: widen so the map stays defined
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, r0, r1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.d0 + (px - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }
}

/// Min/max over an iterator of values, ignoring non-finite entries.
/// Returns `None` when no finite value is seen.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if any { Some((min, max)) } else { None }
}
