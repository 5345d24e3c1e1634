// File: crates/medical-viz/src/stats.rs
// Summary: Quantiles, Pearson correlation and triangle masking.

use serde::{Deserialize, Serialize};

use crate::frame::Frame;

/// Quantile `q` in `[0, 1]` with linear interpolation between order statistics
/// at position `q * (n - 1)`. NaN values are ignored; `None` when nothing remains.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() { return f64::NAN; }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Pearson correlation coefficient. NaN when fewer than two pairs or when
/// either side has zero variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 { return f64::NAN; }
    let (x, y) = (&x[..n], &y[..n]);
    let mx = mean(x);
    let my = mean(y);
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mx;
        let dy = b - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

/// Which triangle of a square matrix is hidden. The diagonal is always hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mask {
    #[default]
    Upper,
    Lower,
}

impl Mask {
    pub fn hides(&self, row: usize, col: usize) -> bool {
        match self {
            Mask::Upper => col >= row,
            Mask::Lower => col <= row,
        }
    }
}

/// Symmetric matrix of pairwise correlations, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Correlate every pair of columns of `frame`, keeping column order.
    pub fn compute(frame: &Frame) -> Self {
        let cols = frame.columns();
        let n = cols.len();
        let mut values = vec![f64::NAN; n * n];
        for i in 0..n {
            for j in 0..=i {
                let r = if i == j {
                    // self-correlation is 1 unless the column is constant
                    let c = &cols[i].values;
                    if pearson(c, c).is_nan() { f64::NAN } else { 1.0 }
                } else {
                    pearson(&cols[i].values, &cols[j].values)
                };
                values[i * n + j] = r;
                values[j * n + i] = r;
            }
        }
        Self { names: cols.iter().map(|c| c.name.clone()).collect(), values }
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn names(&self) -> &[String] { &self.names }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.len() + col]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let n = self.len();
        &self.values[row * n..(row + 1) * n]
    }

    /// Visible `(row, col, value)` cells in row-major order. Masked and NaN cells are skipped.
    pub fn visible_cells(&self, mask: Mask) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let n = self.len();
        (0..n)
            .flat_map(move |i| (0..n).map(move |j| (i, j)))
            .filter(move |&(i, j)| !mask.hides(i, j))
            .map(move |(i, j)| (i, j, self.get(i, j)))
            .filter(|(_, _, v)| !v.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.0), Some(1.0));
        assert_eq!(quantile(&v, 1.0), Some(4.0));
        assert_eq!(quantile(&v, 0.5), Some(2.5));
        // pos = 0.25 * 3 = 0.75
        assert_eq!(quantile(&v, 0.25), Some(1.75));
    }

    #[test]
    fn quantile_ignores_order_and_nan() {
        assert_eq!(quantile(&[4.0, f64::NAN, 1.0, 3.0, 2.0], 0.5), Some(2.5));
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[1.0], 1.5), None);
    }

    #[test]
    fn self_correlation_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((pearson(&x, &x) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_negative_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [5.0, 4.0, 3.0, 2.0, 1.0];
        assert!((pearson(&x, &y) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn correlation_bounded_and_symmetric() {
        let x = [1.0, 3.0, 2.0, 5.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0, 5.0];
        let r = pearson(&x, &y);
        assert!((-1.0..=1.0).contains(&r));
        assert_eq!(r, pearson(&y, &x));
        // sxy = 3, sxx = syy = 10
        assert!((r - 0.3).abs() < 1e-12);
    }

    #[test]
    fn constant_column_is_nan() {
        assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_nan());
        assert!(pearson(&[1.0], &[2.0]).is_nan());
    }

    #[test]
    fn mask_hides_triangle_and_diagonal() {
        assert!(Mask::Upper.hides(0, 0));
        assert!(Mask::Upper.hides(0, 1));
        assert!(!Mask::Upper.hides(1, 0));
        assert!(Mask::Lower.hides(1, 0));
        assert!(!Mask::Lower.hides(0, 1));
    }

    #[test]
    fn matrix_visible_cells_row_major() {
        let f = Frame::new()
            .with_column("a", vec![1.0, 2.0, 3.0])
            .and_then(|f| f.with_column("b", vec![3.0, 2.0, 1.0]))
            .and_then(|f| f.with_column("c", vec![1.0, 3.0, 2.0]))
            .unwrap();
        let m = CorrelationMatrix::compute(&f);
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 0), m.get(0, 1));
        let cells: Vec<(usize, usize)> = m.visible_cells(Mask::Upper).map(|(i, j, _)| (i, j)).collect();
        assert_eq!(cells, vec![(1, 0), (2, 0), (2, 1)]);
        let lower: Vec<(usize, usize)> = m.visible_cells(Mask::Lower).map(|(i, j, _)| (i, j)).collect();
        assert_eq!(lower, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn nan_cells_are_hidden() {
        let f = Frame::new()
            .with_column("a", vec![1.0, 2.0, 3.0])
            .and_then(|f| f.with_column("k", vec![7.0, 7.0, 7.0]))
            .unwrap();
        let m = CorrelationMatrix::compute(&f);
        assert!(m.get(1, 1).is_nan());
        assert_eq!(m.visible_cells(Mask::Upper).count(), 0);
    }
}
