// File: crates/medical-viz/src/clean.rs
// Summary: Outlier filtering ahead of the correlation heat map.

use tracing::debug;

use crate::error::{Result, VizError};
use crate::frame::Frame;
use crate::stats::quantile;

/// Inclusive `[low, high]` band of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub fn of(values: &[f64], lower_q: f64, upper_q: f64) -> Option<Self> {
        Some(Self { low: quantile(values, lower_q)?, high: quantile(values, upper_q)? })
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.low && v <= self.high
    }
}

/// Keep rows with `ap_lo <= ap_hi` and with `height` and `weight` inside their
/// `[lower_q, upper_q]` quantile bands, the bands taken over the unfiltered frame.
pub fn clean_for_heat_map(frame: &Frame, lower_q: f64, upper_q: f64) -> Result<Frame> {
    if frame.is_empty() {
        return Err(VizError::EmptyDataset);
    }
    let ap_hi = frame.column("ap_hi")?;
    let ap_lo = frame.column("ap_lo")?;
    let height = frame.column("height")?;
    let weight = frame.column("weight")?;

    let h_band = Band::of(height, lower_q, upper_q).ok_or(VizError::EmptyDataset)?;
    let w_band = Band::of(weight, lower_q, upper_q).ok_or(VizError::EmptyDataset)?;

    let keep: Vec<bool> = (0..frame.row_count())
        .map(|i| ap_lo[i] <= ap_hi[i] && h_band.contains(height[i]) && w_band.contains(weight[i]))
        .collect();
    let cleaned = frame.filter_rows(&keep)?;
    debug!(
        before = frame.row_count(),
        after = cleaned.row_count(),
        height_low = h_band.low,
        height_high = h_band.high,
        weight_low = w_band.low,
        weight_high = w_band.high,
        "cleaned frame for heat map"
    );
    Ok(cleaned)
}
