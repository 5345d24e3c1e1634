// File: crates/medical-viz/src/catplot.rs
// Summary: Categorical bar chart: indicator counts per variable, one facet per outcome.

use chart_core::types::Insets;
use chart_core::{Axis, Bounds, Figure, Legend, Rectangle, Theme};
use tracing::debug;

use crate::aggregate::{count_categories, melt, total_for, CategoryCount};
use crate::config::CatPlotStyle;
use crate::dataset::{OUTCOME, OVERWEIGHT};
use crate::error::{Result, VizError};
use crate::frame::Frame;

/// Indicator columns unpivoted into the long table, in melt order.
pub const CATEGORICAL_VARIABLES: [&str; 6] = ["cholesterol", "gluc", "smoke", "alco", "active", OVERWEIGHT];

pub const X_LABEL: &str = "variable";
pub const Y_LABEL: &str = "total";
pub const HUE_TITLE: &str = "value";

/// Horizontal space reserved for the figure legend.
const LEGEND_WIDTH: i32 = 100;

/// Long-form counts behind the chart, sorted by `(outcome, variable, value)`.
pub fn cat_counts(frame: &Frame) -> Result<Vec<CategoryCount>> {
    if frame.is_empty() {
        return Err(VizError::EmptyDataset);
    }
    let long = melt(frame, OUTCOME, &CATEGORICAL_VARIABLES)?;
    Ok(count_categories(&long))
}

/// Build the grouped bar chart.
///
/// Facets follow the sorted outcome values. Within a facet, categories are the
/// variable names in sorted order and every category carries one bar per hue
/// level (zero-height when the combination never occurs).
pub fn draw_cat_plot(frame: &Frame, style: &CatPlotStyle, theme: &Theme) -> Result<Figure> {
    let counts = cat_counts(frame)?;

    let mut outcomes: Vec<i64> = counts.iter().map(|c| c.outcome).collect();
    outcomes.sort_unstable();
    outcomes.dedup();
    let mut hues: Vec<i64> = counts.iter().map(|c| c.value).collect();
    hues.sort_unstable();
    hues.dedup();
    let mut categories = CATEGORICAL_VARIABLES.to_vec();
    categories.sort_unstable();

    let y_max = counts.iter().map(|c| c.total).max().unwrap_or(0) as f64;
    let y_top = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let width = i32::try_from(outcomes.len())
        .ok()
        .and_then(|n| style.facet_width.checked_mul(n))
        .and_then(|w| w.checked_add(LEGEND_WIDTH))
        .ok_or_else(|| {
            VizError::Config(format!("{} facets of width {} overflow the figure", outcomes.len(), style.facet_width))
        })?;
    let height = style.facet_height;
    let mut fig = Figure::new(width, height);

    let insets = Insets::new(80, LEGEND_WIDTH as u32 + 20, 40, 72);
    let gap = 40.0 / width as f32;
    let facets = Bounds::inset(width, height, &insets).columns(outcomes.len(), gap);

    let bar_width = style.group_width / hues.len().max(1) as f64;
    for (fi, (&outcome, bounds)) in outcomes.iter().zip(facets).enumerate() {
        let ax = fig.add_axes(bounds);
        ax.title = format!("{OUTCOME} = {outcome}");
        ax.set_face_color(theme.axes_face);
        ax.y_grid = true;
        ax.x_axis = Axis::categorical(X_LABEL, &categories);
        ax.y_axis = Axis::new(if fi == 0 { Y_LABEL } else { "" }, 0.0, y_top);
        ax.y_axis.auto_ticks(6);

        for (ci, category) in categories.iter().enumerate() {
            let left = ci as f64 - style.group_width / 2.0;
            for (hi, &hue) in hues.iter().enumerate() {
                let total = total_for(&counts, outcome, category, hue) as f64;
                let bar = Rectangle::new(left + hi as f64 * bar_width, 0.0, bar_width, total, theme.hue(hi))
                    .with_label(hue.to_string());
                ax.add_rectangle(bar);
            }
        }
    }

    let mut legend = Legend::new(HUE_TITLE);
    for (hi, hue) in hues.iter().enumerate() {
        legend.push(hue.to_string(), theme.hue(hi));
    }
    fig.set_legend(legend);

    debug!(facets = outcomes.len(), hues = hues.len(), groups = counts.len(), "built categorical plot");
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_outcome_frame() -> Frame {
        let mut f = Frame::new().with_column(OUTCOME, vec![0.0, 1.0]).unwrap();
        for name in CATEGORICAL_VARIABLES {
            f.push_column(name, vec![0.0, 1.0]).unwrap();
        }
        f
    }

    #[test]
    fn facets_carry_y_grid() {
        let fig = draw_cat_plot(&two_outcome_frame(), &CatPlotStyle::default(), &Theme::light()).unwrap();
        assert!(fig.axes().iter().all(|ax| ax.y_grid));
    }

    #[test]
    fn oversized_facets_are_rejected() {
        let style = CatPlotStyle { facet_width: 1_500_000_000, ..CatPlotStyle::default() };
        let err = draw_cat_plot(&two_outcome_frame(), &style, &Theme::light()).unwrap_err();
        assert!(matches!(err, VizError::Config(_)));
    }
}
