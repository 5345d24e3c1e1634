// File: crates/medical-viz/src/lib.rs
// Summary: Crate entry point; re-exports dataset, statistics and chart builders.

//! Medical examination charts.
//!
//! Loads the examination survey, derives the `overweight` indicator, and builds
//! two [`chart_core::Figure`]s: a categorical bar chart of indicator counts split
//! by the cardiovascular outcome, and a masked correlation heat map.

pub mod aggregate;
pub mod catplot;
pub mod clean;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frame;
pub mod heatmap;
pub mod stats;
pub mod visualizer;

pub use aggregate::{count_categories, melt, CategoryCount, LongRecord};
pub use catplot::{draw_cat_plot, CATEGORICAL_VARIABLES};
pub use clean::clean_for_heat_map;
pub use config::{CatPlotStyle, HeatMapStyle, VisualizerConfig};
pub use dataset::{load_records, prepare, read_records, MedicalRecord};
pub use error::{Result, VizError};
pub use frame::Frame;
pub use heatmap::{draw_heat_map, draw_matrix};
pub use stats::{pearson, quantile, CorrelationMatrix, Mask};
pub use visualizer::MedicalVisualizer;
