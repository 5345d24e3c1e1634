// File: crates/medical-viz/src/visualizer.rs
// Summary: Loaded dataset plus configuration; entry point for drawing and saving both charts.

use std::path::PathBuf;

use chart_core::{Figure, RenderOptions, Theme};
use tracing::info;

use crate::aggregate::CategoryCount;
use crate::catplot::{cat_counts, draw_cat_plot};
use crate::config::VisualizerConfig;
use crate::dataset::{load_records, prepare, MedicalRecord};
use crate::error::Result;
use crate::frame::Frame;
use crate::heatmap::{draw_heat_map, heat_map_matrix};
use crate::stats::CorrelationMatrix;

pub const CAT_PLOT_FILE: &str = "catplot.png";
pub const HEAT_MAP_FILE: &str = "heatmap.png";

pub struct MedicalVisualizer {
    config: VisualizerConfig,
    theme: Theme,
    frame: Frame,
}

impl MedicalVisualizer {
    /// Read `config.dataset_path` and derive the chart columns.
    pub fn load(config: VisualizerConfig) -> Result<Self> {
        config.validate()?;
        let records = load_records(&config.dataset_path)?;
        Self::from_records(&records, config)
    }

    pub fn from_records(records: &[MedicalRecord], config: VisualizerConfig) -> Result<Self> {
        config.validate()?;
        let frame = prepare(records, config.overweight_bmi_threshold)?;
        Ok(Self { config, theme: Theme::default(), frame })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &VisualizerConfig { &self.config }

    pub fn frame(&self) -> &Frame { &self.frame }

    pub fn draw_cat_plot(&self) -> Result<Figure> {
        draw_cat_plot(&self.frame, &self.config.cat_plot, &self.theme)
    }

    pub fn draw_heat_map(&self) -> Result<Figure> {
        draw_heat_map(&self.frame, &self.config, &self.theme)
    }

    pub fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        cat_counts(&self.frame)
    }

    pub fn correlation(&self) -> Result<CorrelationMatrix> {
        heat_map_matrix(&self.frame, &self.config)
    }

    /// Draw both charts and write them as PNGs into `config.output_dir`.
    /// Returns the written paths (categorical plot first).
    pub fn save_figures(&self) -> Result<Vec<PathBuf>> {
        let opts = RenderOptions { theme: self.theme, ..RenderOptions::default() };
        let dir = &self.config.output_dir;
        let mut written = Vec::with_capacity(2);
        for (name, fig) in [(CAT_PLOT_FILE, self.draw_cat_plot()?), (HEAT_MAP_FILE, self.draw_heat_map()?)] {
            let path = dir.join(name);
            fig.render_to_png(&opts, &path)?;
            info!(path = %path.display(), "wrote figure");
            written.push(path);
        }
        Ok(written)
    }
}
