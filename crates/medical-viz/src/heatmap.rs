// File: crates/medical-viz/src/heatmap.rs
// Summary: Correlation heat map with one masked triangle and per-cell annotations.

use chart_core::axis::{ScaleKind, Tick};
use chart_core::colormap::contrasting_text;
use chart_core::{Axis, Bounds, CenteredNorm, Colormap, Figure, Rectangle, Text, Theme};
use tracing::debug;

use crate::clean::clean_for_heat_map;
use crate::config::{HeatMapStyle, VisualizerConfig};
use crate::error::Result;
use crate::frame::Frame;
use crate::stats::{CorrelationMatrix, Mask};

/// Number of color steps drawn in the colorbar.
const COLORBAR_STEPS: usize = 64;

/// Clean `frame` and correlate all of its columns.
pub fn heat_map_matrix(frame: &Frame, config: &VisualizerConfig) -> Result<CorrelationMatrix> {
    let cleaned = clean_for_heat_map(frame, config.lower_quantile, config.upper_quantile)?;
    Ok(CorrelationMatrix::compute(&cleaned))
}

/// Cell annotation for a coefficient, e.g. `-0.04` -> `"-0.0"` at one decimal.
pub fn format_cell(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Annotation strings of the visible cells, row-major.
pub fn annotations(matrix: &CorrelationMatrix, mask: Mask, decimals: usize) -> Vec<String> {
    matrix.visible_cells(mask).map(|(_, _, v)| format_cell(v, decimals)).collect()
}

/// Clean, correlate and draw. See [`draw_matrix`] for the figure layout.
pub fn draw_heat_map(frame: &Frame, config: &VisualizerConfig, theme: &Theme) -> Result<Figure> {
    let matrix = heat_map_matrix(frame, config)?;
    Ok(draw_matrix(&matrix, &config.heat_map, theme))
}

/// Draw a correlation matrix.
///
/// Axes 0 holds one rectangle per visible cell followed by one text per
/// visible cell, both row-major; cell `(row, col)` spans `[col, col + 1]` by
/// `[row, row + 1]` with rows growing downward. Tick labels on both axes are
/// the column names. Axes 1 is the colorbar.
pub fn draw_matrix(matrix: &CorrelationMatrix, style: &HeatMapStyle, theme: &Theme) -> Figure {
    let n = matrix.len();
    let size = style.size;
    let mut fig = Figure::new(size, size);

    let cmap = Colormap::icefire();
    let norm = CenteredNorm::new(style.vmin, style.vmax, style.center);

    let px = |v: i32| v as f32 / size as f32;
    let main_bounds = Bounds::new(px(120), px(40), 1.0 - px(120 + 170), 1.0 - px(40 + 120));
    let ax = fig.add_axes(main_bounds);
    ax.square = true;
    ax.set_face_color(theme.axes_face);
    ax.x_axis = name_axis(matrix.names(), false);
    ax.y_axis = name_axis(matrix.names(), true);

    let mut labels = Vec::new();
    for (i, j, v) in matrix.visible_cells(style.mask) {
        let color = cmap.sample(norm.apply(v));
        let cell = Rectangle::new(j as f64, i as f64, 1.0, 1.0, color).with_edge(theme.separator, style.line_width);
        ax.add_rectangle(cell);
        labels.push(Text::new(j as f64 + 0.5, i as f64 + 0.5, format_cell(v, style.decimals), contrasting_text(color)));
    }
    let cells = labels.len();
    for label in labels {
        ax.add_text(label);
    }

    // colorbar: 45% of the main axes height, vertically centered
    let cbar_height = main_bounds.height * 0.45;
    let cbar_bounds = Bounds::new(
        1.0 - px(140),
        main_bounds.top + (main_bounds.height - cbar_height) * 0.5,
        px(20),
        cbar_height,
    );
    let cbar = fig.add_axes(cbar_bounds);
    cbar.x_axis = Axis::hidden();
    cbar.y_axis = Axis::new("", style.vmin, style.vmax);
    cbar.y_axis.auto_ticks(7);
    let ticks = cbar
        .y_axis
        .ticks
        .iter()
        .map(|t| Tick::new(t.position, format!("{:.*}", style.colorbar_decimals, t.position)))
        .collect();
    cbar.y_axis.set_ticks(ticks);
    let step = (style.vmax - style.vmin) / COLORBAR_STEPS as f64;
    for k in 0..COLORBAR_STEPS {
        let lo = style.vmin + k as f64 * step;
        let color = cmap.sample(norm.apply(lo + step * 0.5));
        cbar.add_rectangle(Rectangle::new(0.0, lo, 1.0, step, color));
    }

    debug!(columns = n, cells, mask = ?style.mask, "built heat map");
    fig
}

fn name_axis(names: &[String], inverted: bool) -> Axis {
    let n = names.len() as f64;
    let mut axis = Axis::new("", 0.0, n.max(1.0));
    axis.kind = ScaleKind::Categorical;
    axis.inverted = inverted;
    axis.set_ticks(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Tick::new(i as f64 + 0.5, name.as_str()))
            .collect(),
    );
    axis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_format_keeps_negative_zero() {
        assert_eq!(format_cell(-0.04, 1), "-0.0");
        assert_eq!(format_cell(0.04, 1), "0.0");
        assert_eq!(format_cell(0.26, 1), "0.3");
        assert_eq!(format_cell(-0.12, 1), "-0.1");
    }
}
