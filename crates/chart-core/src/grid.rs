// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Round tick positions covering `[min, max]` with at most `max_ticks` intervals.
/// Steps are taken from the 1-2-2.5-5-10 ladder.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max_ticks == 0 { return Vec::new(); }
    let span = (max - min).abs();
    if span < 1e-12 { return vec![min]; }

    let raw = span / max_ticks as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * mag);

    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let first = (lo / step - 1e-9).ceil() as i64;
    let last = (hi / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Format a tick value with the fewest decimals that keep it exact at `step` resolution.
pub fn format_tick(value: f64, step: f64) -> String {
    let mut decimals = 0usize;
    if step > 0.0 && step < 1.0 {
        let exp = step.log10().floor();
        decimals = (-exp) as usize;
        // 2.5 steps need one more digit
        if (step * 10f64.powf(-exp) - 2.5).abs() < 1e-9 { decimals += 1; }
    }
    let s = format!("{:.*}", decimals, value);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}
