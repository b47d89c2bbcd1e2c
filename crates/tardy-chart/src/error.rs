// File: crates/tardy-chart/src/error.rs
// Summary: Library error type for rendering and data decoding.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create raster surface")]
    Surface,
    #[error("PNG encode failed")]
    Encode,
    #[error("task decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
