// File: crates/medical-viz/src/config.rs
// Summary: Configuration for dataset preparation and chart styling.
// Every field has a default, so an empty JSON object (or no file at all)
// reproduces the stock charts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};
use crate::stats::Mask;

/// Default dataset file name, resolved relative to the working directory.
pub const DEFAULT_DATASET: &str = "medical_examination.csv";

/// Largest accepted figure or facet edge, in pixels.
pub const MAX_FIGURE_PIXELS: i32 = 16_384;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// CSV file with one examination per row
    pub dataset_path: PathBuf,

    /// Directory receiving `catplot.png` and `heatmap.png`
    pub output_dir: PathBuf,

    /// BMI strictly above this marks a row as overweight
    pub overweight_bmi_threshold: f64,

    /// Lower quantile for the height/weight outlier filter
    pub lower_quantile: f64,

    /// Upper quantile for the height/weight outlier filter
    pub upper_quantile: f64,

    pub cat_plot: CatPlotStyle,

    pub heat_map: HeatMapStyle,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            output_dir: PathBuf::from("."),
            overweight_bmi_threshold: 25.0,
            lower_quantile: 0.025,
            upper_quantile: 0.975,
            cat_plot: CatPlotStyle::default(),
            heat_map: HeatMapStyle::default(),
        }
    }
}

/// Layout of the categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatPlotStyle {
    /// Pixel width of one facet
    pub facet_width: i32,
    /// Pixel height of one facet
    pub facet_height: i32,
    /// Fraction of a category slot covered by its group of bars
    pub group_width: f64,
}

impl Default for CatPlotStyle {
    fn default() -> Self {
        Self { facet_width: 500, facet_height: 500, group_width: 0.8 }
    }
}

/// Color scaling, masking and annotation of the correlation heat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatMapStyle {
    pub size: i32,
    pub vmin: f64,
    pub vmax: f64,
    pub center: f64,
    /// Decimals used for cell annotations
    pub decimals: usize,
    /// Decimals used for colorbar tick labels
    pub colorbar_decimals: usize,
    pub mask: Mask,
    pub line_width: f32,
}

impl Default for HeatMapStyle {
    fn default() -> Self {
        Self {
            size: 1200,
            vmin: -0.1,
            vmax: 0.25,
            center: 0.0,
            decimals: 1,
            colorbar_decimals: 2,
            mask: Mask::Upper,
            line_width: 0.5,
        }
    }
}

impl VisualizerConfig {
    /// Load a JSON config file; missing keys fall back to defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path.as_ref())?;
        let config: Self = serde_json::from_slice(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.lower_quantile) || !unit.contains(&self.upper_quantile) {
            return Err(VizError::Config(format!(
                "quantiles must lie in [0, 1], got {} and {}",
                self.lower_quantile, self.upper_quantile
            )));
        }
        if self.lower_quantile > self.upper_quantile {
            return Err(VizError::Config(format!(
                "lower_quantile {} exceeds upper_quantile {}",
                self.lower_quantile, self.upper_quantile
            )));
        }
        if !(self.overweight_bmi_threshold.is_finite() && self.overweight_bmi_threshold > 0.0) {
            return Err(VizError::Config("overweight_bmi_threshold must be positive".into()));
        }
        let hm = &self.heat_map;
        if !(hm.vmin < hm.center && hm.center < hm.vmax) {
            return Err(VizError::Config(format!(
                "heat map color range must satisfy vmin < center < vmax, got {} / {} / {}",
                hm.vmin, hm.center, hm.vmax
            )));
        }
        for (name, px) in [
            ("heat_map.size", hm.size),
            ("cat_plot.facet_width", self.cat_plot.facet_width),
            ("cat_plot.facet_height", self.cat_plot.facet_height),
        ] {
            if !(1..=MAX_FIGURE_PIXELS).contains(&px) {
                return Err(VizError::Config(format!("{name} must be in 1..={MAX_FIGURE_PIXELS}, got {px}")));
            }
        }
        if !(self.cat_plot.group_width > 0.0 && self.cat_plot.group_width <= 1.0) {
            return Err(VizError::Config("group_width must be in (0, 1]".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = VisualizerConfig::default();
        c.validate().expect("default config validates");
        assert_eq!(c.heat_map.mask, Mask::Upper);
        assert_eq!(c.dataset_path, PathBuf::from("medical_examination.csv"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c: VisualizerConfig =
            serde_json::from_str(r#"{"lower_quantile": 0.05, "heat_map": {"mask": "lower"}}"#).unwrap();
        assert_eq!(c.lower_quantile, 0.05);
        assert_eq!(c.upper_quantile, 0.975);
        assert_eq!(c.heat_map.mask, Mask::Lower);
        assert_eq!(c.heat_map.decimals, 1);
    }

    #[test]
    fn rejects_inverted_quantiles() {
        let c = VisualizerConfig { lower_quantile: 0.9, upper_quantile: 0.1, ..Default::default() };
        assert!(matches!(c.validate(), Err(VizError::Config(_))));
    }

    #[test]
    fn rejects_bad_color_range() {
        let mut c = VisualizerConfig::default();
        c.heat_map.center = 1.0;
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_oversized_figures() {
        let c: VisualizerConfig = serde_json::from_str(r#"{"cat_plot": {"facet_width": 1500000000}}"#).unwrap();
        let err = c.validate().unwrap_err();
        assert!(matches!(&err, VizError::Config(msg) if msg.contains("cat_plot.facet_width")));

        let mut c = VisualizerConfig::default();
        c.heat_map.size = 0;
        assert!(matches!(c.validate(), Err(VizError::Config(_))));
        c.heat_map.size = MAX_FIGURE_PIXELS;
        c.validate().expect("upper bound is inclusive");
    }
}
