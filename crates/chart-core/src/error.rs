// File: crates/chart-core/src/error.rs
// Summary: Errors raised while rasterizing or encoding a figure.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("encode PNG failed")]
    Encode,

    #[error("pixel readback failed")]
    ReadPixels,

    #[error("figure has no axes")]
    EmptyFigure,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
