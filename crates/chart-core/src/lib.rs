// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the figure model and headless rendering API.

pub mod artist;
pub mod axes;
pub mod axis;
pub mod colormap;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use artist::{Artist, Rectangle, Text};
pub use axes::Axes;
pub use axis::{Axis, ScaleKind, Tick};
pub use colormap::{CenteredNorm, Colormap};
pub use error::RenderError;
pub use figure::{Figure, Legend, LegendEntry};
pub use geometry::Bounds;
pub use render::RenderOptions;
pub use text::TextShaper;
pub use theme::Theme;

/// Re-exported so downstream crates can name colors without depending on Skia directly.
pub use skia_safe::Color;
