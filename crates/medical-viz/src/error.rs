// File: crates/medical-viz/src/error.rs
// Summary: Error type shared by dataset loading, statistics and chart building.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("column {name} has {got} values, expected {expected}")]
    ColumnLength { name: String, got: usize, expected: usize },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("render error: {0}")]
    Render(#[from] chart_core::RenderError),
}
