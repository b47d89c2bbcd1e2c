// File: crates/tardy-chart/src/types.rs
// Summary: Shared types and constants (canvas size, margins, viewport math).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1160;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 500;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative and sum below the canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margin {
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> i32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> i32 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20, 30, 30, 40)
    }
}

/// The fixed pixel canvas the chart is drawn into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub margin: Margin,
}

impl Viewport {
    pub const fn new(width: i32, height: i32, margin: Margin) -> Self {
        Self { width, height, margin }
    }
    /// Plot width inside the margins.
    pub const fn inner_width(&self) -> i32 { self.width - self.margin.left - self.margin.right }
    /// Plot height inside the margins.
    pub const fn inner_height(&self) -> i32 { self.height - self.margin.top - self.margin.bottom }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Margin::default())
    }
}
