// File: crates/tardy-chart/src/lib.rs
// Summary: Core library entry point; exports public API for task-age chart construction and rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod interaction;
pub mod layout;
pub mod scale;
pub mod task;
pub mod theme;
pub mod types;

pub use chart::{RenderOptions, TaskAgeChart};
pub use error::ChartError;
pub use interaction::{HoverState, Navigation};
pub use layout::{layout_bars, task_url, Bar};
pub use scale::{extent, LinearScale};
pub use task::{parse_tasks, Task, TaskAgePoint};
pub use theme::Theme;
pub use types::{Margin, Viewport, HEIGHT, WIDTH};
