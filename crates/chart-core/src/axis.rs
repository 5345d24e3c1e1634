// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick labels.

use crate::grid::{format_tick, nice_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    /// Integer slots `0..n`, one per category.
    Categorical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl Tick {
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self { position, label: label.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Data grows toward the top/left edge instead of the bottom/right.
    pub inverted: bool,
    pub visible: bool,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            inverted: false,
            visible: true,
            ticks: Vec::new(),
        }
    }

    /// Categorical axis: category `i` sits at position `i`, range padded by half a slot.
    pub fn categorical<S: AsRef<str>>(label: impl Into<String>, categories: &[S]) -> Self {
        let n = categories.len() as f64;
        let mut a = Self::new(label, -0.5, (n - 0.5).max(0.5));
        a.kind = ScaleKind::Categorical;
        a.ticks = categories
            .iter()
            .enumerate()
            .map(|(i, c)| Tick::new(i as f64, c.as_ref()))
            .collect();
        a
    }

    /// Replace ticks with "nice" numeric ticks inside the current range.
    pub fn auto_ticks(&mut self, max_ticks: usize) {
        let positions = nice_ticks(self.min, self.max, max_ticks);
        let step = if positions.len() > 1 { positions[1] - positions[0] } else { 1.0 };
        self.ticks = positions
            .into_iter()
            .map(|p| Tick::new(p, format_tick(p, step)))
            .collect();
    }

    pub fn set_ticks(&mut self, ticks: Vec<Tick>) {
        self.ticks = ticks;
    }

    pub fn tick_labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn hidden() -> Self {
        let mut a = Self::new("", 0.0, 1.0);
        a.visible = false;
        a
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new("", 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_positions() {
        let a = Axis::categorical("variable", &["a", "b", "c"]);
        assert_eq!(a.tick_labels(), vec!["a", "b", "c"]);
        assert_eq!(a.ticks[2].position, 2.0);
        assert_eq!((a.min, a.max), (-0.5, 2.5));
    }

    #[test]
    fn auto_ticks_label_integers() {
        let mut a = Axis::new("total", 0.0, 1000.0);
        a.auto_ticks(5);
        assert_eq!(a.tick_labels(), vec!["0", "200", "400", "600", "800", "1000"]);
    }
}
